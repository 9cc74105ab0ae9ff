pub mod login_admin;
pub mod logout_admin;
pub mod verify_session;
