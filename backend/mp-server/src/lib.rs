pub mod api;
pub mod error;
pub mod gate;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    admin::{
        admin::{get_user_detail, search_users},
        search_users_query::SearchUsersQuery,
        user_detail_response::UserDetailResponse,
        user_list_response::UserListResponse,
    },
    auth::{
        auth::{callback, password_login, request_passwordless, signout},
        password_login_request::PasswordLoginRequest,
        passwordless_request::PasswordlessRequest,
        session_response::SessionResponse,
    },
    error::{ApiError, Result as ApiResult},
    extractors::session_token::SessionToken,
    me::{
        me::{get_me, update_profile},
        me_response::MeResponse,
        update_profile_request::UpdateProfileRequest,
    },
    members::{entitlements_response::EntitlementsResponse, members::entitlements},
    memberships::{
        membership_dto::MembershipDto, overview_dto::MembershipOverviewDto,
        standing_dto::StandingDto,
    },
    profiles::profile_dto::ProfileDto,
};

pub use crate::gate::{GateError, Passport};
pub use crate::routes::build_router;
pub use crate::state::AppState;
