use super::BuilderExecutor;
use crate::github::{
    error::Result,
    pull_request_client::PullRequestClient,
    request::{PullRequestRequest, ReviewerRequest},
    response::PullRequest,
};

pub struct CreatePullRequestBuilder<'a> {
    client: &'a PullRequestClient,
    pub request: PullRequestRequest,
    pub reviewers: ReviewerRequest,
}

impl<'a> CreatePullRequestBuilder<'a> {
    pub fn new(client: &'a PullRequestClient) -> Self {
        CreatePullRequestBuilder {
            client,
            request: PullRequestRequest::new("", "", ""),
            reviewers: ReviewerRequest::new(),
        }
    }

    /// Starts from a complete request, e.g. one read from a config file.
    pub fn with_request(mut self, request: PullRequestRequest) -> Self {
        self.request = request;
        self
    }

    /// Blank and repeated names are dropped, as with `reviewers`.
    pub fn with_reviewers(mut self, reviewers: ReviewerRequest) -> Self {
        self.reviewers = ReviewerRequest::new()
            .reviewers(reviewers.reviewers)
            .team_reviewers(reviewers.team_reviewers);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.request.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.request.draft = draft;
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.request.base = base.into();
        self
    }

    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.request.head = head.into();
        self
    }

    pub fn reviewers<I, S>(mut self, reviewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reviewers = self.reviewers.reviewers(reviewers);
        self
    }

    pub fn team_reviewers<I, S>(mut self, teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reviewers = self.reviewers.team_reviewers(teams);
        self
    }
}

impl BuilderExecutor for CreatePullRequestBuilder<'_> {
    type Output = PullRequest;

    async fn execute(self) -> Result<Self::Output> {
        self.client
            .create_pull_request_with_reviewers(&self.request, &self.reviewers)
            .await
    }
}
