pub mod local_media_storage;

pub use local_media_storage::LocalMediaStorage;
