mod send_contact;
mod smtp_config;

pub use send_contact::{send_contact_handler, ContactFormRequest};
pub use smtp_config::configure_smtp_config;

pub use send_contact::__path_send_contact_handler;
