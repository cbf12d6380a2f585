//! Derives the hero/contact view-model from a fetched profile.

use serde::Serialize;

use crate::models::GitHubUser;

const FALLBACK_FIRST: &str = "Alaa";
const FALLBACK_DISPLAY: &str = "N1xev";
const DEFAULT_TITLE: &str = "Full Stack Web Developer";
const DEFAULT_DESCRIPTION: &str = "Full stack Web dev crafting digital experiences at the intersection of design, technology, and user experience.";
const FALLBACK_LOCATION: &str = "Online for work!";
const DEFAULT_LOCATION: &str = "Egypt!";
pub const AVAILABILITY: &str = "Available for work";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayName {
    pub first: String,
    pub display: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBio {
    pub title: String,
    pub description: String,
    pub tagline: String,
    pub location: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayProfile {
    pub name: DisplayName,
    pub bio: DisplayBio,
}

impl DisplayProfile {
    /// Content shown when no profile could be fetched.
    pub fn fallback() -> Self {
        Self {
            name: DisplayName {
                first: FALLBACK_FIRST.to_string(),
                display: FALLBACK_DISPLAY.to_string(),
                full: format!("{FALLBACK_FIRST} ({FALLBACK_DISPLAY})"),
            },
            bio: DisplayBio {
                title: DEFAULT_TITLE.to_string(),
                description: DEFAULT_DESCRIPTION.to_string(),
                tagline: tagline_for(FALLBACK_FIRST),
                location: FALLBACK_LOCATION.to_string(),
                availability: AVAILABILITY.to_string(),
            },
        }
    }
}

/// Builds the display profile. Total over its input: a missing profile
/// yields [`DisplayProfile::fallback`].
pub fn resolve(profile: Option<&GitHubUser>) -> DisplayProfile {
    let Some(user) = profile else {
        return DisplayProfile::fallback();
    };

    let name = non_empty(user.name.as_deref());
    let bio = non_empty(user.bio.as_deref());

    let first = name
        .and_then(|n| n.split_whitespace().next())
        .unwrap_or(user.login.as_str())
        .to_string();
    let full = match name {
        Some(n) => format!("{n} ({})", user.login),
        None => user.login.clone(),
    };
    let title = match non_empty(user.company.as_deref()) {
        Some(company) => format!("Developer at {company}"),
        None => DEFAULT_TITLE.to_string(),
    };

    DisplayProfile {
        bio: DisplayBio {
            title,
            description: bio.unwrap_or(DEFAULT_DESCRIPTION).to_string(),
            tagline: bio.map_or_else(|| tagline_for(&first), str::to_string),
            location: non_empty(user.location.as_deref())
                .unwrap_or(DEFAULT_LOCATION)
                .to_string(),
            availability: AVAILABILITY.to_string(),
        },
        name: DisplayName {
            first,
            display: user.login.clone(),
            full,
        },
    }
}

fn tagline_for(first: &str) -> String {
    format!("🐻 Dev {first}: Full stack Web dev")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
