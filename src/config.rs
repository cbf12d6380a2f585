//! Configuration types and loading.
//!
//! Everything the page shows that does not come from the GitHub API lives
//! here: the account to query, the featured project list and the static
//! contact, skills and experience content.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_TTL;
use crate::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::curator::DEFAULT_CAP;
use crate::error::{Error, Result};

pub const CONFIG_ENV: &str = "FOLIO_CONFIG";
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Main configuration for the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioConfig {
    /// GitHub account whose profile and repositories are shown.
    #[serde(default = "default_username")]
    pub username: String,

    /// Technologies highlighted in the hero section.
    #[serde(default = "default_focus_tech")]
    pub focus_tech: Vec<String>,

    #[serde(default = "default_achievements")]
    pub achievements: Vec<String>,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub projects: ProjectsConfig,

    #[serde(default = "Contact::builtin")]
    pub contact: Contact,

    #[serde(default = "Skills::builtin")]
    pub skills: Skills,

    #[serde(default = "default_experience")]
    pub experience: Vec<Experience>,

    #[serde(default = "default_social")]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long a response is reused before it is fetched again.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl ApiConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Repository names shown first, in this order. Matched case-insensitively.
    #[serde(default = "default_featured")]
    pub featured: Vec<String>,

    #[serde(default = "default_cap")]
    pub cap: usize,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            featured: default_featured(),
            cap: default_cap(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub github_handle: String,
}

impl Contact {
    fn builtin() -> Self {
        Self {
            email: "alasamouly@gmail.com".to_string(),
            github: "https://github.com/N1xev".to_string(),
            github_handle: "@N1xev".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub focus: Vec<String>,
}

impl Skills {
    fn builtin() -> Self {
        Self {
            primary: strings(&[
                "HTML",
                "CSS",
                "JavaScript",
                "TypeScript",
                "C",
                "Go",
                "SQLite",
                "PostgreSQL",
                "MongoDB",
            ]),
            secondary: strings(&[
                "Bun.js",
                "React",
                "Next.js",
                "Node.js",
                "Bootstrap",
                "Hono.js",
                "Express.js",
                "TailwindCSS",
                "Git",
                "Linux",
            ]),
            focus: strings(&[
                "Full Stack Development",
                "Web Applications",
                "TUIs/CLIs",
                "Open Source",
            ]),
        }
    }
}

/// One entry of the work timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub year: String,
    pub role: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub handle: String,
    pub url: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_username() -> String {
    "N1xev".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

const fn default_cache_ttl_secs() -> u64 {
    DEFAULT_TTL.as_secs()
}

fn default_featured() -> Vec<String> {
    strings(&[
        "charmbracelet-docs",
        "Lunaris-Project/HyprLuna",
        "Oreo-BootStrap-Portfolio",
        "Oreo-web-v1",
        "BMI-Calculator",
        "samouly-flake",
    ])
}

const fn default_cap() -> usize {
    DEFAULT_CAP
}

fn default_focus_tech() -> Vec<String> {
    strings(&["JavaScript", "TypeScript", "React", "Next.js", "Node.js"])
}

fn default_experience() -> Vec<Experience> {
    let entry = |year: &str, role: &str, company: &str, description: &str, tech: &[&str]| {
        Experience {
            year: year.to_string(),
            role: role.to_string(),
            company: company.to_string(),
            description: description.to_string(),
            tech: strings(tech),
        }
    };
    vec![
        entry(
            "2024",
            "Full Stack Developer",
            "Freelance",
            "Building modern web applications and contributing to open source projects.",
            &["JavaScript", "ReactJS", "NextJS", "BunJS", "NodeJS"],
        ),
        entry(
            "2023",
            "Web Developer",
            "Various Projects",
            "Created responsive websites and web applications using modern technologies.",
            &["HTML", "CSS", "BootStrap", "TailwindCSS", "JavaScript"],
        ),
        entry(
            "2022",
            "Startup as Web Developer",
            "Simple Projects",
            "Founded a way to learn websites development and developed simple websites.",
            &["HTML", "CSS", "JavaScript"],
        ),
        entry(
            "2021",
            "Startup",
            "Small Projects",
            "Started to know about programming and development with discord bots coding.",
            &["DiscordJS", "MongoDB", "JavaScript"],
        ),
    ]
}

fn default_social() -> Vec<SocialLink> {
    let link = |name: &str, handle: &str, url: &str| SocialLink {
        name: name.to_string(),
        handle: handle.to_string(),
        url: url.to_string(),
    };
    vec![
        link("GitHub", "@N1xev", "https://github.com/N1xev"),
        link("Portfolio", "n1xev.dev", "#"),
        link("Email", "contact@n1xev.dev", "mailto:contact@n1xev.dev"),
    ]
}

fn default_achievements() -> Vec<String> {
    strings(&[
        "Starstruck x2 - Created repositories that have been starred by many users",
        "Pull Shark - Opened pull requests that have been merged",
        "YOLO - Merged a pull request without code review",
        "Quickdraw - Closed an issue or pull request within 5 minutes of opening",
    ])
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            focus_tech: default_focus_tech(),
            achievements: default_achievements(),
            api: ApiConfig::default(),
            projects: ProjectsConfig::default(),
            contact: Contact::builtin(),
            skills: Skills::builtin(),
            experience: default_experience(),
            social: default_social(),
        }
    }
}

impl PortfolioConfig {
    /// Load configuration from the default locations.
    ///
    /// Paths checked in order:
    /// 1. `$FOLIO_CONFIG`
    /// 2. `./folio.toml`
    /// 3. `<config dir>/folio/folio.toml`
    ///
    /// Falls back to the built-in content when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load_from(&local);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::load_from(&user_config);
            }
        }

        tracing::debug!("no configuration file found, using built-in content");
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, parsing fails or
    /// validation rejects it.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ConfigNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;

        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// `<config dir>/folio/folio.toml`, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join(CONFIG_FILE_NAME))
    }

    /// Writes the built-in configuration to `path`, creating parent
    /// directories. Refuses to overwrite an existing file.
    pub fn write_default(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(Error::InvalidConfig(format!(
                "{} already exists",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::InvalidConfig("username cannot be empty".to_string()));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("api.base_url cannot be empty".to_string()));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "api.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.projects.cap == 0 {
            return Err(Error::InvalidConfig(
                "projects.cap must be at least 1".to_string(),
            ));
        }
        if let Some(pos) = self.projects.featured.iter().position(|f| f.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "projects.featured[{pos}] cannot be empty"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortfolioConfig::default();
        assert_eq!(config.username, "N1xev");
        assert_eq!(config.projects.cap, 6);
        assert_eq!(config.projects.featured.len(), 6);
        assert_eq!(config.projects.featured[0], "charmbracelet-docs");
        assert_eq!(config.api.base_url, "https://api.github.com");
        assert_eq!(config.api.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.experience.len(), 4);
        assert_eq!(config.social.len(), 3);
    }

    #[test]
    fn test_load_from_partial_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(
            &path,
            r#"
username = "octocat"

[projects]
featured = ["Hello-World"]
cap = 4

[api]
base_url = "http://localhost:8080"
"#,
        )
        .unwrap();

        let config = PortfolioConfig::load_from(&path).unwrap();
        assert_eq!(config.username, "octocat");
        assert_eq!(config.projects.featured, vec!["Hello-World"]);
        assert_eq!(config.projects.cap, 4);
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.skills, Skills::builtin());
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = PortfolioConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(p) if p == path));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "usrname = \"typo\"\n").unwrap();
        let err = PortfolioConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[projects]\ncap = 0\n").unwrap();
        let err = PortfolioConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();
        match PortfolioConfig::load_from(&path).unwrap_err() {
            Error::InvalidConfig(msg) => assert!(msg.contains("timeout_secs")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_username_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "username = \"  \"\n").unwrap();
        assert!(matches!(
            PortfolioConfig::load_from(&path).unwrap_err(),
            Error::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_write_default_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("folio.toml");

        PortfolioConfig::write_default(&path).unwrap();
        let loaded = PortfolioConfig::load_from(&path).unwrap();
        assert_eq!(loaded, PortfolioConfig::default());

        assert!(PortfolioConfig::write_default(&path).is_err());
    }
}
