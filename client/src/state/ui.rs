//! Local UI chrome state: which placeholder view the shell shows.
//!
//! DESIGN
//! ======
//! Held in memory only. Nothing is written to the URL or to storage, so a
//! reload always lands on the dashboard.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::fmt;
use std::str::FromStr;

/// The four screens reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Dashboard,
    Library,
    Upload,
    Search,
}

impl View {
    /// Sidebar order.
    pub const ALL: [View; 4] = [View::Dashboard, View::Library, View::Upload, View::Search];

    /// Stable identifier, used for `data-view` attributes.
    pub fn id(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Library => "library",
            View::Upload => "upload",
            View::Search => "search",
        }
    }

    /// Navigation button label.
    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Library => "Document Library",
            View::Upload => "Upload Documents",
            View::Search => "Search & Filter",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.id() == s)
            .ok_or_else(|| UnknownView(s.to_owned()))
    }
}

/// UI state for the authenticated shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub view: View,
}

impl UiState {
    pub fn is_active(&self, view: View) -> bool {
        self.view == view
    }
}
