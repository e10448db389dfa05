pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    account_dto::AccountDto,
    auth::{
        auth::{login, register},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
    },
    bio::{
        bio::{delete_bio, get_bio, set_bio},
        bio_response::BioResponse,
        update_bio_request::UpdateBioRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::CallerIdentity,
    follows::{
        follower_list_response::FollowerListResponse,
        following_response::FollowingResponse,
        follows::{follow, list_followers, list_following, unfollow},
    },
    search::{search::search_users, search_query::SearchQuery, search_response::SearchResponse},
    users::{
        change_password_request::ChangePasswordRequest,
        change_password_response::ChangePasswordResponse,
        profile_response::ProfileResponse,
        update_username_request::UpdateUsernameRequest,
        update_username_response::UpdateUsernameResponse,
        users::{change_password, change_username, delete_account, get_profile},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
