// src/github/client.rs
// =============================================================================
// The real `RepoSource`: GET {api}/users/{user}/repos?per_page=100&page=N
//
// Headers sent on every request:
//   Accept: application/vnd.github+json
//   User-Agent: readme-stats/<version>   (the API refuses requests without one)
//   Authorization: Bearer <token>        (only when a token is configured)
//
// Without a token the API still answers, just with a much lower rate limit.
// =============================================================================

use anyhow::{anyhow, bail, Context, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use url::Url;

use super::repos::{RepoSource, Repository, PER_PAGE};
use crate::config::Config;

const GITHUB_JSON: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    client: Client,
    repos_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        // One client for every page; reqwest keeps the connection pool inside it
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        if config.token.is_some() {
            tracing::info!("authenticating with GITHUB_TOKEN");
        } else {
            tracing::info!("no token configured, running unauthenticated (low rate limit)");
        }

        Ok(GitHubClient {
            client,
            repos_url: repos_url(&config.api_url, &config.user)?,
            token: config.token.clone(),
        })
    }
}

// Builds {api}/users/{user}/repos, escaping the user name as a path segment
fn repos_url(api_url: &Url, user: &str) -> Result<Url> {
    let mut url = api_url.clone();
    url.path_segments_mut()
        .map_err(|_| anyhow!("API URL cannot be used as a base: {}", api_url))?
        .pop_if_empty()
        .extend(["users", user, "repos"]);
    Ok(url)
}

impl RepoSource for GitHubClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Repository>> {
        // GET .../users/{user}/repos?per_page=100&page=N
        let mut request = self
            .client
            .get(self.repos_url.clone())
            .query(&[("per_page", PER_PAGE), ("page", page)])
            .header(ACCEPT, GITHUB_JSON);

        // Authorization: Bearer <token>, only when we have one
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Request to {} failed (page {})", self.repos_url, page))?;

        // Anything but 2xx (rate limit, unknown user, ...) aborts the run
        let status = response.status();
        if !status.is_success() {
            bail!(
                "Failed to list repositories from {}: HTTP {} (page {})",
                self.repos_url,
                status,
                page
            );
        }

        // The body is a JSON array of repository objects
        let batch = response
            .json::<Vec<Repository>>()
            .await
            .with_context(|| format!("Unexpected response body for page {}", page))?;

        Ok(batch)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `request` declared `mut`?
//    - reqwest's RequestBuilder methods take `self` and return a new builder
//    - To add a header conditionally we reassign: request = request.bearer_auth(..)
//
// 2. What does .query(&[...]) do?
//    - Serializes the pairs into the URL's query string:
//      ?per_page=100&page=3
//
// 3. What is path_segments_mut()?
//    - Gives mutable access to the URL path, one segment at a time
//    - Segments are percent-encoded for us, so "octo cat" becomes "octo%20cat"
//    - pop_if_empty() drops the empty segment left by a trailing '/'
//
// 4. What is concat!(env!(...))?
//    - Both run at compile time: env! reads Cargo's package name/version and
//      concat! glues them into one &'static str like "readme-stats/0.1.0"
// -----------------------------------------------------------------------------
