//! Pull request workflow against the GitHub REST API: branch checks, PR
//! creation, reviewer requests and lookups for one repository.

pub mod builder;
mod client_config;
mod error;
mod pull_request_client;
pub mod request;
pub mod response;

pub use builder::{BuilderExecutor, CreatePullRequestBuilder};
pub use client_config::{ClientConfig, TokenWarning, DEFAULT_API_URL};
pub use error::{BranchRole, Error, Result, ValidationError};
pub use pull_request_client::PullRequestClient;
pub use request::{PullRequestRequest, ReviewerRequest};
pub use response::PullRequest;
