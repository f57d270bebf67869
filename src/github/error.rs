use crate::http::{self, ErrorBody};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("GitHub API responded with {status}: {body}")]
    Api { status: u16, body: ErrorBody },
    #[error(transparent)]
    Http(http::Error),
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        match err {
            http::Error::Status { status, body } => Error::Api { status, body },
            other => Error::Http(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchRole {
    Head,
    Base,
}

impl fmt::Display for BranchRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchRole::Head => write!(f, "Source"),
            BranchRole::Base => write!(f, "Target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{role} branch '{name}' does not exist in the repository")]
    BranchNotFound { role: BranchRole, name: String },
    #[error("At least one reviewer or team must be provided")]
    NoReviewers,
}
