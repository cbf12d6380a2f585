//! Page-level UI state: theme, active section and reveal tracking.
//!
//! Front-ends own a [`PageState`] and feed it visibility notifications
//! through a [`SectionObserver`]. Nothing here touches a renderer; effects
//! are returned as values (e.g. [`Theme::class_name`]) for the caller to
//! apply.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fraction of a section that must be visible before it counts as seen.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Class to set on the document root, if any.
    pub const fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("dark"),
            Self::Light => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{other}', expected 'dark' or 'light'")),
        }
    }
}

/// The five navigable sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Intro,
    Projects,
    Work,
    Skills,
    Connect,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Intro,
        Self::Projects,
        Self::Work,
        Self::Skills,
        Self::Connect,
    ];

    /// Element id used as the scroll target.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Projects => "projects",
            Self::Work => "work",
            Self::Skills => "skills",
            Self::Connect => "connect",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Intro => "Intro",
            Self::Projects => "Featured Projects",
            Self::Work => "Selected Work",
            Self::Skills => "Skills",
            Self::Connect => "Let's Connect",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageState {
    theme: Theme,
    active: Option<Section>,
    revealed: BTreeSet<Section>,
}

impl PageState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and returns the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// `None` until the first section has been seen.
    pub const fn active(&self) -> Option<Section> {
        self.active
    }

    /// A seen section becomes active and stays revealed from then on.
    pub fn on_visible(&mut self, section: Section) {
        self.active = Some(section);
        self.revealed.insert(section);
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }
}

/// Handle returned by [`SectionObserver::subscribe`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the handle leaves the listener registered; pass it to unsubscribe"]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(Section)>;

/// Dispatches section visibility to registered listeners.
pub struct SectionObserver {
    threshold: f64,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Default for SectionObserver {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl fmt::Debug for SectionObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionObserver")
            .field("threshold", &self.threshold)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SectionObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Section) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription.0);
        self.listeners.len() != before
    }

    /// Removes every listener.
    pub fn disconnect(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Reports that `ratio` of `section` is on screen. Listeners only hear
    /// about sections at or above the threshold.
    pub fn notify(&mut self, section: Section, ratio: f64) {
        if ratio < self.threshold {
            return;
        }
        tracing::trace!(%section, ratio, "section visible");
        for (_, listener) in &mut self.listeners {
            listener(section);
        }
    }
}
