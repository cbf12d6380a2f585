use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{GitHubRepo, GitHubUser};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Page size for the popularity-sorted listing fed to the curator.
pub const STARRED_PAGE_SIZE: u32 = 20;
/// Page size for the recently-updated listing.
pub const RECENT_PAGE_SIZE: u32 = 10;

/// Anything that can produce a user's profile and repositories.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches a user profile by username.
    async fn fetch_user(&self, username: &str) -> Result<GitHubUser>;

    /// Fetches repositories sorted by star count, most popular first.
    async fn fetch_repos_by_stars(&self, username: &str) -> Result<Vec<GitHubRepo>>;

    /// Fetches repositories sorted by last update, newest first.
    async fn fetch_recent_repos(&self, username: &str) -> Result<Vec<GitHubRepo>>;
}

/// Creates a preconfigured HTTP client with required headers.
fn build_client(timeout: Duration) -> Result<Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("folio/", env!("CARGO_PKG_VERSION"))),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(Error::Client)
}

/// Unauthenticated GitHub REST client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    /// Client against an API root: the public API or a mock server.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "GET");

        let response = self.http.get(url).send().await.map_err(Error::Network)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status, body });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                Error::Decode(e)
            } else {
                Error::Network(e)
            }
        })
    }

    fn repos_url(&self, username: &str, sort: &str, per_page: u32) -> String {
        format!(
            "{}/users/{username}/repos?sort={sort}&per_page={per_page}",
            self.base_url
        )
    }
}

#[async_trait]
impl DataSource for GitHubClient {
    async fn fetch_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{username}", self.base_url);
        self.get_json(&url).await
    }

    async fn fetch_repos_by_stars(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let url = self.repos_url(username, "stars", STARRED_PAGE_SIZE);
        self.get_json(&url).await
    }

    async fn fetch_recent_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let url = self.repos_url(username, "updated", RECENT_PAGE_SIZE);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_json() -> serde_json::Value {
        json!({
            "login": "N1xev",
            "name": "Alaa Samouly",
            "bio": "Building things",
            "public_repos": 12,
            "followers": 30,
            "following": 4,
            "location": "Cairo",
            "company": null,
            "blog": "",
            "avatar_url": "https://avatars.githubusercontent.com/u/1",
            "html_url": "https://github.com/N1xev",
            "created_at": "2021-05-01T00:00:00Z"
        })
    }

    fn repo_json(id: u64, name: &str, stars: u32) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "full_name": format!("N1xev/{name}"),
            "description": null,
            "html_url": format!("https://github.com/N1xev/{name}"),
            "stargazers_count": stars,
            "forks_count": 0,
            "language": "Rust",
            "fork": false,
            "updated_at": "2024-06-01T12:00:00Z",
            "topics": []
        })
    }

    async fn client_for(server: &MockServer) -> GitHubClient {
        GitHubClient::with_base_url(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_user_sends_accept_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/N1xev"))
            .and(header("accept", "application/vnd.github.v3+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server).await.fetch_user("N1xev").await.unwrap();
        assert_eq!(user.login, "N1xev");
        assert_eq!(user.name.as_deref(), Some("Alaa Samouly"));
    }

    #[tokio::test]
    async fn fetch_repos_by_stars_uses_popularity_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/N1xev/repos"))
            .and(query_param("sort", "stars"))
            .and(query_param("per_page", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                repo_json(1, "alpha", 10),
                repo_json(2, "beta", 5),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let repos = client_for(&server)
            .await
            .fetch_repos_by_stars("N1xev")
            .await
            .unwrap();
        let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn fetch_recent_repos_uses_updated_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/N1xev/repos"))
            .and(query_param("sort", "updated"))
            .and(query_param("per_page", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([repo_json(3, "gamma", 1)])))
            .expect(1)
            .mount(&server)
            .await;

        let repos = client_for(&server)
            .await
            .fetch_recent_repos("N1xev")
            .await
            .unwrap();
        assert_eq!(repos.len(), 1);
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/N1xev"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API rate limit exceeded"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .fetch_user("N1xev")
            .await
            .unwrap_err();
        assert!(err.is_unavailable());
        match err {
            Error::Status { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "API rate limit exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_payload_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/N1xev"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .fetch_user("N1xev")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            GitHubClient::with_base_url("http://localhost:9999/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
        assert_eq!(
            client.repos_url("me", "stars", 20),
            "http://localhost:9999/users/me/repos?sort=stars&per_page=20"
        );
    }
}
