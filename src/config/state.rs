// src/config/state.rs
use crate::filter::FilterState;

/// Which category pool the catalog list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Courses,
    Products,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Courses, Tab::Products];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Courses => "Cursos Online",
            Tab::Products => "Productos",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Courses => "cursos",
            Tab::Products => "productos",
        }
    }
}

impl std::str::FromStr for Tab {
    type Err = crate::error::ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cursos" | "courses" => Ok(Tab::Courses),
            "productos" | "products" => Ok(Tab::Products),
            other => Err(crate::error::ParseFilterError::Tab(s!(other))),
        }
    }
}

/// Everything the presentation shell mutates. Lives for the session only.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellState {
    pub active_tab: Tab,
    /// 1-based; never clamped here, see `Shell` for navigation rules.
    pub current_page: usize,
    pub filters: FilterState,
    pub search_query: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Courses,
            current_page: 1,
            filters: FilterState::default(),
            search_query: s!(),
        }
    }
}
