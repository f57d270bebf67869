use super::error::{Error, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Url,
};
use std::fmt;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const FINE_GRAINED_TOKEN_PREFIX: &str = "github_pat_";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT_VALUE: &str = "pr-manager";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenWarning {
    /// The token is not a fine-grained personal access token. Classic and
    /// app tokens are still accepted.
    UnexpectedPrefix,
}

impl fmt::Display for TokenWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenWarning::UnexpectedPrefix => write!(
                f,
                "Token does not start with '{}', it might not be loaded correctly",
                FINE_GRAINED_TOKEN_PREFIX
            ),
        }
    }
}

/// Repository coordinates and credentials shared by every request.
#[derive(Clone)]
pub struct ClientConfig {
    token: String,
    owner: String,
    repo: String,
    base_url: Url,
    headers: HeaderMap,
    token_warning: Option<TokenWarning>,
}

impl ClientConfig {
    pub fn new(
        token: impl AsRef<str>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self> {
        Self::with_base_url(token, owner, repo, DEFAULT_API_URL)
    }

    /// Empty tokens are rejected here as well, even though callers are
    /// expected to stop earlier when no token was supplied at all.
    pub fn with_base_url(
        token: impl AsRef<str>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        base_url: impl AsRef<str>,
    ) -> Result<Self> {
        let token = token.as_ref().trim().to_string();

        if token.contains('"') || token.contains('\'') {
            return Err(Error::Configuration(
                "Token contains invalid characters (quotes or apostrophes)".to_string(),
            ));
        }

        if token.is_empty() {
            return Err(Error::Configuration("Token is empty".to_string()));
        }

        let token_warning = if token.starts_with(FINE_GRAINED_TOKEN_PREFIX) {
            None
        } else {
            let warning = TokenWarning::UnexpectedPrefix;
            log::warn!("{}", warning);
            Some(warning)
        };

        let headers = build_headers(&token)?;
        let base_url = parse_base_url(base_url.as_ref())?;

        let config = ClientConfig {
            owner: owner.into(),
            repo: repo.into(),
            base_url,
            headers,
            token_warning,
            token,
        };

        log::debug!("Using token: {}", config.masked_token());
        for (name, value) in config.headers.iter() {
            if *name == AUTHORIZATION {
                log::debug!("   {}: Bearer {}", name, config.masked_token());
            } else {
                log::debug!("   {}: {}", name, value.to_str().unwrap_or_default());
            }
        }

        Ok(config)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn token_warning(&self) -> Option<&TokenWarning> {
        self.token_warning.as_ref()
    }

    /// `{base}/repos/{owner}/{repo}/{segments...}`, each segment
    /// percent-encoded on its own so branch names like `release#2` or
    /// `feature/x` stay a single segment.
    pub fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        // parse_base_url rejects cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["repos", self.owner.as_str(), self.repo.as_str()])
                .extend(segments);
        }
        url
    }

    /// Token preview that is safe to log.
    pub fn masked_token(&self) -> String {
        mask_token(&self.token)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &self.masked_token())
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("base_url", &self.base_url)
            .field("token_warning", &self.token_warning)
            .finish()
    }
}

fn build_headers(token: &str) -> Result<HeaderMap> {
    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        Error::Configuration("Token cannot be used in an Authorization header".to_string())
    })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
    headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    Ok(headers)
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)
        .map_err(|err| Error::Configuration(format!("Invalid API URL '{}': {}", base_url, err)))?;

    if url.cannot_be_a_base() {
        return Err(Error::Configuration(format!(
            "Invalid API URL '{}': not a base URL",
            base_url
        )));
    }

    Ok(url)
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 20 {
        let head: String = chars[..15].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}
