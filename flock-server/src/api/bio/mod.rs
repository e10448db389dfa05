pub mod bio;
pub mod bio_response;
pub mod update_bio_request;
