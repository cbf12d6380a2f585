//! `folio` - render a GitHub-backed portfolio in the terminal.

mod args;
mod logging;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use folio::loader::{self, LoadRequest};
use folio::render::{RepoList, TextPage};
use folio::{
    CachedSource, GitHubClient, PageState, Portfolio, PortfolioConfig, Section, SectionObserver,
    Theme,
};
use serde::Serialize;

use args::{Args, Command};

type Source = CachedSource<GitHubClient>;

#[derive(Serialize)]
struct PageJson<'a> {
    theme: Theme,
    active: Option<Section>,
    #[serde(flatten)]
    portfolio: &'a Portfolio,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    logging::init(&args.log_level)?;

    let mut config = match &args.config {
        Some(path) => PortfolioConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PortfolioConfig::load().context("failed to load configuration")?,
    };
    if let Some(username) = args.username {
        config.username = username;
    }

    let client = GitHubClient::with_base_url(&config.api.base_url, config.api.timeout())?;
    let source = CachedSource::new(client, config.api.cache_ttl());

    match args.command.unwrap_or_default() {
        Command::Show {
            section,
            theme,
            json,
            refresh,
        } => show(&source, &config, section, theme, json, refresh).await,
        Command::Projects { json } => {
            let portfolio = fetch(&source, &config).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&portfolio.projects)?);
            } else {
                print!("{}", RepoList(&portfolio.projects));
            }
            Ok(())
        }
        Command::Recent { limit } => {
            let repos = loader::load_recent(&source, &config.username, limit).await;
            print!("{}", RepoList(&repos));
            Ok(())
        }
        Command::Open { name } => {
            let portfolio = fetch(&source, &config).await;
            let repo = portfolio
                .projects
                .iter()
                .find(|repo| repo.name.eq_ignore_ascii_case(&name))
                .with_context(|| format!("no project named '{name}' in the gallery"))?;
            tracing::info!(url = %repo.html_url, "opening project");
            open::that(&repo.html_url)
                .with_context(|| format!("failed to open {}", repo.html_url))
        }
        Command::InitConfig { path } => {
            let path = path
                .or_else(PortfolioConfig::user_config_path)
                .context("no config directory on this platform; pass a path")?;
            PortfolioConfig::write_default(&path)?;
            println!("wrote {}", path.display());
            Ok(())
        }
    }
}

async fn fetch(source: &Source, config: &PortfolioConfig) -> Portfolio {
    let request = LoadRequest {
        username: &config.username,
        featured: &config.projects.featured,
        cap: config.projects.cap,
    };
    loader::load(source, &request).await
}

async fn show(
    source: &Source,
    config: &PortfolioConfig,
    section: Option<Section>,
    theme: Theme,
    json: bool,
    refresh: Option<u64>,
) -> Result<()> {
    let state = Rc::new(RefCell::new(PageState::new(theme)));
    let mut observer = SectionObserver::default();
    let subscription = observer.subscribe({
        let state = Rc::clone(&state);
        move |section| state.borrow_mut().on_visible(section)
    });
    observer.notify(section.unwrap_or(Section::Intro), 1.0);

    let mut ticker = refresh.map(|secs| tokio::time::interval(Duration::from_secs(secs.max(1))));
    loop {
        if let Some(ticker) = ticker.as_mut() {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        let portfolio = fetch(source, config).await;
        let state = state.borrow();
        if json {
            let page = PageJson {
                theme: state.theme(),
                active: state.active(),
                portfolio: &portfolio,
            };
            println!("{}", serde_json::to_string_pretty(&page)?);
        } else {
            print!(
                "{}",
                TextPage {
                    portfolio: &portfolio,
                    config,
                    state: &state,
                    only: section,
                }
            );
        }

        if ticker.is_none() {
            break;
        }
    }

    observer.unsubscribe(subscription);
    Ok(())
}
