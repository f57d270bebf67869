use serde::{Deserialize, Serialize};

/// Payload for `POST /repos/{owner}/{repo}/pulls/{number}/requested_reviewers`.
///
/// Either list may be empty on its own; an empty list is never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team_reviewers: Vec<String>,
}

impl ReviewerRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reviewers<I, S>(mut self, reviewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for reviewer in reviewers {
            push_unique(&mut self.reviewers, reviewer.into());
        }
        self
    }

    pub fn team_reviewers<I, S>(mut self, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for team in teams {
            push_unique(&mut self.team_reviewers, team.into());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.reviewers.is_empty() && self.team_reviewers.is_empty()
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !value.is_empty() && !values.contains(&value) {
        values.push(value);
    }
}
