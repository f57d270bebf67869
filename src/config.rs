use crate::github::{PullRequestRequest, ReviewerRequest, DEFAULT_API_URL};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::Path, str::FromStr};

const DEFAULT_CONFIG_FILE_NAME: &str = "pr-manager.yaml";
const DEFAULT_LOG_LEVEL: &str = "info";

const TOKEN_VAR: &str = "GITHUB_TOKEN";
const OWNER_VAR: &str = "GITHUB_OWNER";
const REPO_VAR: &str = "GITHUB_REPO";
const API_URL_VAR: &str = "GITHUB_API_URL";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
    pub repository: RepositoryConfig,
    pub pull_request: PullRequestConfig,
}

impl Config {
    /// Reads the YAML file at `path`, or `pr-manager.yaml` in the working
    /// directory, then applies the `GITHUB_*` environment overrides.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE_NAME));

        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read {}", path.display()))?;

        let mut config = Config::from_yaml(&config_string)?;
        config.apply_overrides(|key| env::var(key).ok());

        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Config> {
        let config = serde_yaml::from_str::<Config>(yaml).context("Invalid configuration file")?;

        Ok(config)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(owner) = lookup(OWNER_VAR) {
            self.repository.owner = owner;
        }
        if let Some(name) = lookup(REPO_VAR) {
            self.repository.name = name;
        }
        if let Some(api_url) = lookup(API_URL_VAR) {
            self.repository.api_url = api_url;
        }
    }

    pub fn log_level(&self) -> Result<log::Level> {
        log::Level::from_str(&self.log_level)
            .ok()
            .with_context(|| format!("Unknown log level '{}'", self.log_level))
    }

    fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub owner: String,
    pub name: String,
    #[serde(default = "RepositoryConfig::default_api_url")]
    pub api_url: String,
}

impl RepositoryConfig {
    fn default_api_url() -> String {
        DEFAULT_API_URL.to_string()
    }
}

/// The `pull_request` section: the creation payload and the reviewers to
/// request, side by side in one mapping.
#[derive(Debug, Serialize, Deserialize)]
pub struct PullRequestConfig {
    #[serde(flatten)]
    pub request: PullRequestRequest,
    #[serde(flatten)]
    pub reviewers: ReviewerRequest,
}

/// The token is only ever taken from the environment, never from the file.
pub fn github_token() -> Result<String> {
    token_from(|key| env::var(key).ok())
}

fn token_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    match lookup(TOKEN_VAR) {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => bail!("{} not found in environment variables", TOKEN_VAR),
    }
}
