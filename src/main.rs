use anyhow::{Context, Result};
use pr_manager::{
    config::{self, Config},
    github::{BuilderExecutor, ClientConfig, PullRequestClient},
    logger,
};
use std::{env, path::PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())
        .await
        .context("Cannot load config file")?;

    logger::init(config.log_level()?)?;

    let repository = &config.repository;
    log::info!("Owner: {}", repository.owner);
    log::info!("Repository: {}", repository.name);
    log::info!("API URL: {}", repository.api_url);

    let token = config::github_token()?;
    let client_config = ClientConfig::with_base_url(
        token,
        &repository.owner,
        &repository.name,
        &repository.api_url,
    )
    .context("Cannot configure the GitHub client")?;
    let client = PullRequestClient::new(client_config);

    let pull_request = config.pull_request;
    log::info!("Creating pull request '{}'", pull_request.request.title);

    let builder = client
        .pull_request()
        .with_request(pull_request.request)
        .with_reviewers(pull_request.reviewers);

    let pr = builder
        .execute()
        .await
        .context("Cannot create the pull request")?;

    match pr.reviewers_added {
        Some(true) => log::info!("PR #{} is ready for review: {}", pr.number, pr.html_url),
        Some(false) => log::warn!(
            "PR #{} was created without reviewers: {}",
            pr.number,
            pr.html_url
        ),
        None => log::info!("PR #{} created: {}", pr.number, pr.html_url),
    }

    Ok(())
}
