//! Core type definitions for the application

/// Which screen is currently displayed. Exactly one is active at any time;
/// it decides which state slice is authoritative for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Home,
    Search,
    Detail,
}

/// Which part of the UI currently has input focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    SearchBar,
    Content,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::SearchBar => ActiveSection::Content,
            ActiveSection::Content => ActiveSection::SearchBar,
        }
    }
}

/// Which category rail is focused on the home screen.
/// The latest title backs the hero section and is not navigable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HomeSection {
    #[default]
    Upcoming,
    TopRated,
    Popular,
}

impl HomeSection {
    pub fn next(self) -> Self {
        match self {
            Self::Upcoming => Self::TopRated,
            Self::TopRated => Self::Popular,
            Self::Popular => Self::Upcoming,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Upcoming => Self::Popular,
            Self::TopRated => Self::Upcoming,
            Self::Popular => Self::TopRated,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::TopRated => "Top Rated",
            Self::Popular => "Popular",
        }
    }
}

/// UI state for the application: input focus, the search box contents and
/// the per-list cursor positions. Selection indices live here rather than in
/// the data slices so that replacing a slice wholesale never carries a stale
/// cursor with it.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_input: String,
    pub home_section: HomeSection,
    pub upcoming_selected: usize,
    pub top_rated_selected: usize,
    pub popular_selected: usize,
    pub search_selected: usize,
    pub similar_selected: usize,
}
