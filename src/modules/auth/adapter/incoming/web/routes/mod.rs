mod login_admin;
mod logout_admin;
mod verify_session;

pub use login_admin::{login_admin_handler, LoginRequestDto, LoginResponseBody};
pub use logout_admin::{logout_admin_handler, LogoutResponseBody};
pub use verify_session::{verify_session_handler, VerifySessionResponse};

pub use login_admin::__path_login_admin_handler;
pub use logout_admin::__path_logout_admin_handler;
pub use verify_session::__path_verify_session_handler;
