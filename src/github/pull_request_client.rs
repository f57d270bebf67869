use super::{
    builder::CreatePullRequestBuilder,
    client_config::ClientConfig,
    error::{BranchRole, Error, Result, ValidationError},
    request::{PullRequestRequest, ReviewerRequest},
    response::PullRequest,
};
use crate::http::{Client, ClientRequestBuilder};
use serde_json::Value;

/// Pull request operations for a single repository.
///
/// Every call is one round trip, except creation which first checks both
/// branches. Nothing is retried.
#[derive(Debug, Clone)]
pub struct PullRequestClient {
    config: ClientConfig,
    http: Client,
}

impl PullRequestClient {
    pub fn new(config: ClientConfig) -> Self {
        PullRequestClient {
            config,
            http: Client::new(),
        }
    }

    pub fn pull_request(&self) -> CreatePullRequestBuilder<'_> {
        CreatePullRequestBuilder::new(self)
    }

    /// `true` only when GitHub answers 200 for the branch. A missing branch
    /// and a failed request both yield `false`.
    pub async fn branch_exists(&self, branch: &str) -> bool {
        let url = self.config.endpoint(["branches", branch]);

        match self.http.get(url).headers(self.config.headers()).send().await {
            Ok(response) => response.status().as_u16() == 200,
            Err(err) => {
                log::debug!("Branch lookup for '{}' failed: {}", branch, err);
                false
            }
        }
    }

    /// Checks head first, then base, stopping at the first missing branch.
    pub async fn validate_branches(&self, head: &str, base: &str) -> Result<()> {
        if !self.branch_exists(head).await {
            return Err(ValidationError::BranchNotFound {
                role: BranchRole::Head,
                name: head.to_string(),
            }
            .into());
        }

        if !self.branch_exists(base).await {
            return Err(ValidationError::BranchNotFound {
                role: BranchRole::Base,
                name: base.to_string(),
            }
            .into());
        }

        log::info!("Both branches exist in the repository");

        Ok(())
    }

    pub async fn create_pull_request(&self, request: &PullRequestRequest) -> Result<PullRequest> {
        self.validate_branches(&request.head, &request.base).await?;

        log::debug!("Creating pull request");
        let url = self.config.endpoint(["pulls"]);

        let pr: PullRequest = self
            .http
            .post(url)
            .headers(self.config.headers())
            .json(request)?
            .fetch()
            .await
            .map_err(|err| report("creating PR", err.into()))?;

        log::info!("Pull Request created successfully");
        log::info!("Title: {}", pr.title);
        log::info!("URL: {}", pr.html_url);
        log::info!("PR Number: #{}", pr.number);

        Ok(pr)
    }

    /// Requests reviews from users and/or teams. Fails before touching the
    /// network when both lists are empty.
    pub async fn add_reviewers(&self, pr_number: u64, reviewers: &ReviewerRequest) -> Result<Value> {
        if reviewers.is_empty() {
            return Err(ValidationError::NoReviewers.into());
        }

        let number = pr_number.to_string();
        let url = self
            .config
            .endpoint(["pulls", number.as_str(), "requested_reviewers"]);

        let result: Value = self
            .http
            .post(url)
            .headers(self.config.headers())
            .json(reviewers)?
            .fetch()
            .await
            .map_err(|err| report("adding reviewers", err.into()))?;

        log::info!("Reviewers added successfully to PR #{}", pr_number);
        if !reviewers.reviewers.is_empty() {
            log::info!("Added reviewers: {}", reviewers.reviewers.join(", "));
        }
        if !reviewers.team_reviewers.is_empty() {
            log::info!("Added teams: {}", reviewers.team_reviewers.join(", "));
        }

        Ok(result)
    }

    /// Creates the pull request, then asks for reviews.
    ///
    /// A failed creation fails the whole call. A failed reviewer request does
    /// not: the created PR is returned with `reviewers_added` set to `false`.
    /// With an empty reviewer request the second call is skipped and
    /// `reviewers_added` stays `None`.
    pub async fn create_pull_request_with_reviewers(
        &self,
        request: &PullRequestRequest,
        reviewers: &ReviewerRequest,
    ) -> Result<PullRequest> {
        let mut pr = self.create_pull_request(request).await?;

        if reviewers.is_empty() {
            return Ok(pr);
        }

        match self.add_reviewers(pr.number, reviewers).await {
            Ok(_) => pr.reviewers_added = Some(true),
            Err(err) => {
                log::warn!(
                    "PR was created, but an error occurred while adding reviewers: {}",
                    err
                );
                pr.reviewers_added = Some(false);
            }
        }

        Ok(pr)
    }

    pub async fn get_pull_request(&self, pr_number: u64) -> Result<PullRequest> {
        let number = pr_number.to_string();
        let url = self.config.endpoint(["pulls", number.as_str()]);

        let pr = self
            .http
            .get(url)
            .headers(self.config.headers())
            .fetch()
            .await
            .map_err(|err| report("retrieving PR information", err.into()))?;

        Ok(pr)
    }
}

fn report(action: &str, err: Error) -> Error {
    log::error!("Error {}: {}", action, err);
    if let Error::Api { body, .. } = &err {
        log::error!("Error details: {}", body);
    }
    err
}
