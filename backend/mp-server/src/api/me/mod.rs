pub mod me;
pub mod me_response;
pub mod update_profile_request;
