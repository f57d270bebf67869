use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A pull request as returned by the GitHub API.
///
/// Only the fields this crate relies on are typed; everything else the API
/// sent is kept untouched in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub html_url: String,
    pub title: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// Set by [`create_pull_request_with_reviewers`] once a reviewer request
    /// was attempted. `None` when no reviewers were asked for.
    ///
    /// [`create_pull_request_with_reviewers`]: crate::github::PullRequestClient::create_pull_request_with_reviewers
    #[serde(skip)]
    pub reviewers_added: Option<bool>,
}

impl PullRequest {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn state(&self) -> Option<&str> {
        self.field("state").and_then(Value::as_str)
    }

    pub fn is_draft(&self) -> bool {
        self.field("draft").and_then(Value::as_bool).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_keep_untyped_fields() -> Result<(), serde_json::Error> {
        let pr: PullRequest = serde_json::from_value(json!({
            "number": 42,
            "html_url": "https://github.com/octo/repo/pull/42",
            "title": "t",
            "state": "open",
            "draft": true,
            "user": {"login": "octocat"}
        }))?;

        assert_eq!(pr.number, 42);
        assert_eq!(pr.state(), Some("open"));
        assert!(pr.is_draft());
        assert_eq!(pr.field("user"), Some(&json!({"login": "octocat"})));
        assert_eq!(pr.reviewers_added, None);

        Ok(())
    }

    #[test]
    fn should_require_number_url_and_title() {
        let result = serde_json::from_value::<PullRequest>(json!({"number": 1, "title": "t"}));

        assert!(result.is_err());
    }
}
