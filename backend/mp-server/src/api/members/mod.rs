pub mod entitlements_response;
pub mod members;
