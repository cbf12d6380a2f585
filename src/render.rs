//! Plain-text rendering of the portfolio sections.

use std::fmt::{self, Display, Formatter};

use crate::config::PortfolioConfig;
use crate::loader::Portfolio;
use crate::models::GitHubRepo;
use crate::page::{PageState, Section};

const EMPTY_PROJECTS: &str = "No projects to show right now.";
const NO_LANGUAGE: &str = "Repository";
const NO_DESCRIPTION: &str = "No description available";
const COPYRIGHT_YEAR: u16 = 2025;

/// Renders the whole page, or a single section when `only` is set.
pub struct TextPage<'a> {
    pub portfolio: &'a Portfolio,
    pub config: &'a PortfolioConfig,
    pub state: &'a PageState,
    pub only: Option<Section>,
}

impl Display for TextPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.nav(f)?;
        for section in Section::ALL {
            if self.only.is_some_and(|only| only != section) {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "== {} ==", section.title())?;
            match section {
                Section::Intro => self.intro(f)?,
                Section::Projects => projects(f, &self.portfolio.projects)?,
                Section::Work => self.work(f)?,
                Section::Skills => self.skills(f)?,
                Section::Connect => self.connect(f)?,
            }
        }
        if self.only.is_none() {
            self.footer(f)?;
        }
        Ok(())
    }
}

impl TextPage<'_> {
    fn nav(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = Section::ALL
            .iter()
            .map(|&section| {
                if self.state.active() == Some(section) {
                    format!("[{section}]")
                } else {
                    section.to_string()
                }
            })
            .collect();
        writeln!(f, "{}  ({} theme)", items.join(" · "), self.state.theme())
    }

    fn intro(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let profile = &self.portfolio.profile;
        writeln!(f, "{} ({})", profile.name.first, profile.name.display)?;
        writeln!(f, "{}", profile.bio.title)?;
        writeln!(f)?;
        writeln!(f, "{}", profile.bio.description)?;
        writeln!(f, "● {}  |  {}", profile.bio.availability, profile.bio.location)?;

        if let Some(user) = &self.portfolio.user {
            writeln!(
                f,
                "{} repos · {} followers · {} following · on GitHub since {}",
                user.public_repos,
                user.followers,
                user.following,
                user.created_at.format("%Y")
            )?;
        }
        if !self.config.focus_tech.is_empty() {
            writeln!(f, "Focus: {}", self.config.focus_tech.join(", "))?;
        }
        Ok(())
    }

    fn work(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for job in &self.config.experience {
            writeln!(f, "{}  {} @ {}", job.year, job.role, job.company)?;
            writeln!(f, "      {}", job.description)?;
            if !job.tech.is_empty() {
                writeln!(f, "      [{}]", job.tech.join("] ["))?;
            }
        }
        Ok(())
    }

    fn skills(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let skills = &self.config.skills;
        writeln!(f, "Primary:   {}", skills.primary.join(", "))?;
        writeln!(f, "Secondary: {}", skills.secondary.join(", "))?;
        writeln!(f, "Focus:     {}", skills.focus.join(", "))
    }

    fn connect(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contact = &self.config.contact;
        writeln!(f, "Email: {}", contact.email)?;
        writeln!(f, "GitHub: {} ({})", contact.github_handle, contact.github)?;
        for link in &self.config.social {
            writeln!(f, "  {:<10} {:<20} {}", link.name, link.handle, link.url)?;
        }
        if !self.config.achievements.is_empty() {
            writeln!(f)?;
            writeln!(f, "Achievements:")?;
            for achievement in &self.config.achievements {
                writeln!(f, "  - {achievement}")?;
            }
        }
        Ok(())
    }

    fn footer(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = &self.portfolio.profile.name;
        writeln!(f)?;
        writeln!(f, "© {COPYRIGHT_YEAR} {}. All rights reserved.", name.full)?;
        writeln!(f, "Built with ❤️ by {}", name.display)
    }
}

fn projects(f: &mut Formatter<'_>, repos: &[GitHubRepo]) -> fmt::Result {
    if repos.is_empty() {
        return writeln!(f, "{EMPTY_PROJECTS}");
    }
    for repo in repos {
        let language = repo.language.as_deref().unwrap_or(NO_LANGUAGE);
        let description = repo
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION);
        writeln!(
            f,
            "{}  <{language}>  ★ {}  ⑂ {}",
            repo.name, repo.stargazers_count, repo.forks_count
        )?;
        writeln!(f, "    {description}")?;
        writeln!(f, "    {}", repo.html_url)?;
    }
    Ok(())
}

/// One line per repository, for the `recent` listing.
pub struct RepoList<'a>(pub &'a [GitHubRepo]);

impl Display for RepoList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "{EMPTY_PROJECTS}");
        }
        for repo in self.0 {
            writeln!(
                f,
                "{:<32} {:>6} ★  updated {}",
                repo.name,
                repo.stargazers_count,
                repo.updated_at.format("%Y-%m-%d")
            )?;
        }
        Ok(())
    }
}
