//! Fetches everything the page needs and derives the view-models.

use serde::Serialize;

use crate::client::DataSource;
use crate::curator;
use crate::models::{GitHubRepo, GitHubUser};
use crate::profile::{self, DisplayProfile};

/// What to fetch and how to curate it.
#[derive(Debug, Clone)]
pub struct LoadRequest<'a> {
    pub username: &'a str,
    pub featured: &'a [String],
    pub cap: usize,
}

/// Data behind one display cycle. An unavailable source shows up as
/// `user == None` or an empty `projects` list, never as an error.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub user: Option<GitHubUser>,
    pub profile: DisplayProfile,
    pub projects: Vec<GitHubRepo>,
}

impl Portfolio {
    /// State before any data has arrived.
    pub fn loading() -> Self {
        Self {
            user: None,
            profile: DisplayProfile::fallback(),
            projects: Vec::new(),
        }
    }
}

/// Fetches the profile and the popularity-sorted listing concurrently.
///
/// Each fetch has its own failure boundary: one failing does not affect the
/// other, and failures are not retried.
pub async fn load<S>(source: &S, request: &LoadRequest<'_>) -> Portfolio
where
    S: DataSource + ?Sized,
{
    let (user, repos) = tokio::join!(
        fetch_user_or_none(source, request.username),
        fetch_repos_or_empty(source, request.username),
    );

    let projects = curator::curate(&repos, request.featured, request.cap);
    tracing::info!(
        username = request.username,
        profile = user.is_some(),
        fetched = repos.len(),
        shown = projects.len(),
        "portfolio loaded"
    );

    Portfolio {
        profile: profile::resolve(user.as_ref()),
        user,
        projects,
    }
}

/// Recently updated repositories, or an empty list if the source fails.
pub async fn load_recent<S>(source: &S, username: &str, limit: usize) -> Vec<GitHubRepo>
where
    S: DataSource + ?Sized,
{
    match source.fetch_recent_repos(username).await {
        Ok(repos) => curator::recent(&repos, limit),
        Err(e) => {
            tracing::warn!(username, error = %e, "failed to fetch recent repositories");
            Vec::new()
        }
    }
}

async fn fetch_user_or_none<S>(source: &S, username: &str) -> Option<GitHubUser>
where
    S: DataSource + ?Sized,
{
    source
        .fetch_user(username)
        .await
        .map_err(|e| tracing::warn!(username, error = %e, "failed to fetch GitHub user"))
        .ok()
}

async fn fetch_repos_or_empty<S>(source: &S, username: &str) -> Vec<GitHubRepo>
where
    S: DataSource + ?Sized,
{
    source
        .fetch_repos_by_stars(username)
        .await
        .map_err(|e| tracing::warn!(username, error = %e, "failed to fetch GitHub repos"))
        .unwrap_or_default()
}
