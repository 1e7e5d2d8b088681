pub mod admin;
pub mod search_users_query;
pub mod user_detail_response;
pub mod user_list_response;
