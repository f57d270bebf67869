pub mod config;
pub mod github;
pub mod http;
pub mod logger;
