use serde::{Deserialize, Serialize};

/// Payload for `POST /repos/{owner}/{repo}/pulls`.
///
/// `body` is left out of the JSON entirely when absent or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestRequest {
    pub title: String,
    pub head: String,
    pub base: String,
    #[serde(default, skip_serializing_if = "PullRequestRequest::no_body")]
    pub body: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

impl PullRequestRequest {
    pub fn new(
        title: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            body: None,
            draft: false,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    fn no_body(body: &Option<String>) -> bool {
        body.as_deref().map_or(true, str::is_empty)
    }
}
