pub mod search;
pub mod search_query;
pub mod search_response;
