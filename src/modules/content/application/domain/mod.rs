pub mod entities;
pub mod record;
