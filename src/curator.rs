//! Picks which repositories the projects gallery shows.
//!
//! Featured names come first, in the order they are configured, followed by
//! the remaining own repositories in the order the API returned them
//! (stars descending). The result never contains a fork, a site-hosting
//! repository or the same repository twice.

use std::collections::HashSet;

use crate::models::GitHubRepo;

/// Maximum number of projects in the gallery.
pub const DEFAULT_CAP: usize = 6;

/// Name fragment that marks a GitHub Pages repository.
pub const SITE_HOSTING_MARKER: &str = ".github.io";

/// Repositories owned by the account: no forks, no site-hosting repos.
pub fn own_repos(all: &[GitHubRepo]) -> Vec<&GitHubRepo> {
    all.iter()
        .filter(|repo| !repo.fork && !repo.is_site_hosting())
        .collect()
}

/// Builds the gallery list from a popularity-sorted listing.
pub fn curate(all: &[GitHubRepo], featured: &[String], cap: usize) -> Vec<GitHubRepo> {
    let own = own_repos(all);
    let mut claimed = HashSet::new();
    let mut picked = Vec::with_capacity(cap.min(own.len()));

    for wanted in featured {
        let found = own
            .iter()
            .find(|repo| matches_featured(repo, wanted) && !claimed.contains(&repo.id));
        match found {
            Some(repo) => {
                claimed.insert(repo.id);
                picked.push(*repo);
            }
            None => tracing::debug!(name = %wanted, "featured repository not found"),
        }
    }

    picked.truncate(cap);
    for repo in &own {
        if picked.len() >= cap {
            break;
        }
        if claimed.insert(repo.id) {
            picked.push(*repo);
        }
    }

    picked.into_iter().cloned().collect()
}

/// The "recently updated" listing: drops site-hosting repos and keeps
/// at most `limit` entries in the given order.
pub fn recent(all: &[GitHubRepo], limit: usize) -> Vec<GitHubRepo> {
    all.iter()
        .filter(|repo| !repo.is_site_hosting())
        .take(limit)
        .cloned()
        .collect()
}

/// Featured entries match on the repository name only, ignoring case.
fn matches_featured(repo: &GitHubRepo, wanted: &str) -> bool {
    repo.name.eq_ignore_ascii_case(wanted)
}
