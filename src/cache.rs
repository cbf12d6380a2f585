//! In-process response cache with a revalidation window.

use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::client::DataSource;
use crate::error::Result;
use crate::models::{GitHubRepo, GitHubUser};

/// GitHub responses are reused for an hour before being fetched again.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct Entry<T> {
    fetched_at: Instant,
    value: T,
}

type Slot<T> = Mutex<HashMap<String, Entry<T>>>;

/// Wraps a [`DataSource`] and serves repeated lookups from memory until
/// they are older than the TTL. Failed fetches are never stored.
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    users: Slot<GitHubUser>,
    starred: Slot<Vec<GitHubRepo>>,
    recent: Slot<Vec<GitHubRepo>>,
}

impl<S: DataSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            users: Mutex::default(),
            starred: Mutex::default(),
            recent: Mutex::default(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn lookup<T, F>(&self, slot: &Slot<T>, key: &str, fetch: F) -> Result<T>
    where
        T: Clone + Send,
        F: Future<Output = Result<T>> + Send,
    {
        // Held across the fetch so concurrent lookups of one key fetch once.
        let mut entries = slot.lock().await;
        if let Some(entry) = entries.get(key) {
            if entry.fetched_at.elapsed() < self.ttl {
                tracing::trace!(key, "cache hit");
                return Ok(entry.value.clone());
            }
            tracing::debug!(key, "cache entry expired");
        }

        let value = fetch.await?;
        entries.insert(
            key.to_string(),
            Entry {
                fetched_at: Instant::now(),
                value: value.clone(),
            },
        );
        Ok(value)
    }
}

#[async_trait]
impl<S: DataSource> DataSource for CachedSource<S> {
    async fn fetch_user(&self, username: &str) -> Result<GitHubUser> {
        self.lookup(&self.users, username, self.inner.fetch_user(username))
            .await
    }

    async fn fetch_repos_by_stars(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        self.lookup(
            &self.starred,
            username,
            self.inner.fetch_repos_by_stars(username),
        )
        .await
    }

    async fn fetch_recent_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        self.lookup(&self.recent, username, self.inner.fetch_recent_repos(username))
            .await
    }
}
