pub mod auth;
pub mod password_login_request;
pub mod passwordless_request;
pub mod session_response;
