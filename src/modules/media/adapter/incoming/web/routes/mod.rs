mod upload_image;

pub use upload_image::{upload_image_handler, UploadForm};

pub use upload_image::__path_upload_image_handler;
