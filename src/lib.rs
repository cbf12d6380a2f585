//! Data core for a GitHub-backed personal portfolio.
//!
//! The profile and repository listing are fetched concurrently through a
//! [`DataSource`], then turned into view-models: a [`DisplayProfile`] for the
//! hero and contact sections and a curated project list for the gallery.

pub mod cache;
pub mod client;
pub mod config;
pub mod curator;
pub mod error;
pub mod loader;
pub mod models;
pub mod page;
pub mod profile;
pub mod render;

pub use cache::CachedSource;
pub use client::{DataSource, GitHubClient};
pub use config::PortfolioConfig;
pub use error::{Error, Result};
pub use loader::{load, LoadRequest, Portfolio};
pub use models::{GitHubRepo, GitHubUser};
pub use page::{PageState, Section, SectionObserver, Subscription, Theme};
pub use profile::{resolve, DisplayProfile};
