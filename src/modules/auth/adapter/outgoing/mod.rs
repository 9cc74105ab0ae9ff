pub mod security;
pub mod session_store_memory;
