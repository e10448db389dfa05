pub mod follower_list_response;
pub mod following_response;
pub mod follows;
