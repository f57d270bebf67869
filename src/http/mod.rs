pub mod client;
pub mod request;
pub mod request_builder;
pub mod response;

pub use client::{Client, ClientRequestBuilder};
pub use response::ErrorBody;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: ErrorBody },
    #[error("Failed to send request")]
    SendRequest {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseText {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
    #[error("Failed to serialize request body")]
    Serialize {
        #[source]
        cause: serde_json::Error,
    },
}
