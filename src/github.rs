use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::models::{ProfileSummary, Repository};
use crate::types::{GitHubRepo, GitHubUser};
use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, warn};
use url::Url;

/// The two calls a lookup needs from the profile API.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetch the profile of `username`.
    async fn fetch_user(&self, username: &str) -> Result<ProfileSummary>;

    /// Fetch the first page of repositories from the link a profile carries,
    /// most recently updated first.
    async fn fetch_repositories(&self, repos_url: &str) -> Result<Vec<Repository>>;
}

pub struct GitHubClient {
    client: Client,
    api_base: Url,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            api_base: config.api_base.clone(),
            per_page: config.per_page,
        })
    }

    /// `<base>/<username>`, with the username escaped as a single path segment.
    pub fn user_url(&self, username: &str) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| ViewerError::Config(format!("not a base URL: {}", self.api_base)))?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }

    pub fn repositories_url(&self, repos_url: &str) -> Result<Url> {
        let mut url = Url::parse(repos_url)?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("sort", "updated");
        Ok(url)
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let rate_limit_remaining = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        debug!(
            status = %response.status(),
            url = %response.url(),
            ?rate_limit_remaining,
            "Profile API response"
        );

        if rate_limit_remaining == Some(0) {
            warn!("Profile API rate limit exhausted");
        }

        Ok(response)
    }
}

#[async_trait]
impl ProfileApi for GitHubClient {
    async fn fetch_user(&self, username: &str) -> Result<ProfileSummary> {
        let url = self.user_url(username)?;
        let response = self.make_request(url).await?;

        if !response.status().is_success() {
            warn!(username, status = %response.status(), "Profile lookup failed");
            return Err(ViewerError::NotFoundOrRateLimited);
        }

        let user: GitHubUser = response.json().await?;
        Ok(user.into())
    }

    async fn fetch_repositories(&self, repos_url: &str) -> Result<Vec<Repository>> {
        let url = self.repositories_url(repos_url)?;
        let response = self.make_request(url).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Repository listing failed");
            return Err(ViewerError::RepositoriesUnavailable(format!(
                "API request failed with status {}",
                status
            )));
        }

        let repos: Vec<GitHubRepo> = response.json().await?;
        Ok(repos.into_iter().map(Repository::from).collect())
    }
}
