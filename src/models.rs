use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a GitHub user profile from the `/users/{username}` API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
}

/// A repository from the `/users/{username}/repos` API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl GitHubRepo {
    /// Site-hosting repositories (`<user>.github.io`) are never shown.
    pub fn is_site_hosting(&self) -> bool {
        self.name.contains(crate::curator::SITE_HOSTING_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_deserializes_with_null_optionals() {
        let user: GitHubUser = serde_json::from_value(json!({
            "login": "octocat",
            "id": 583231,
            "name": null,
            "bio": null,
            "public_repos": 8,
            "followers": 10,
            "following": 0,
            "location": null,
            "company": null,
            "blog": "",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "created_at": "2011-01-25T18:44:36Z"
        }))
        .unwrap();

        assert_eq!(user.login, "octocat");
        assert!(user.name.is_none());
        assert_eq!(user.blog.as_deref(), Some(""));
        assert_eq!(user.created_at.to_rfc3339(), "2011-01-25T18:44:36+00:00");
    }

    #[test]
    fn repo_topics_default_to_empty() {
        let repo: GitHubRepo = serde_json::from_value(json!({
            "id": 1,
            "name": "octocat.github.io",
            "full_name": "octocat/octocat.github.io",
            "description": null,
            "html_url": "https://github.com/octocat/octocat.github.io",
            "stargazers_count": 3,
            "forks_count": 1,
            "language": "HTML",
            "fork": false,
            "updated_at": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert!(repo.topics.is_empty());
        assert!(repo.is_site_hosting());
    }
}
