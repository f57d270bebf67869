mod pull_request_request;
mod reviewer_request;

pub use pull_request_request::PullRequestRequest;
pub use reviewer_request::ReviewerRequest;
