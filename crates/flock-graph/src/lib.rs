pub mod graph_config;
pub mod graph_service;

pub use graph_config::GraphConfig;
pub use graph_service::GraphService;
