//! State slices and data structures for the home, search and detail views

use serde::Deserialize;

use super::gateway::DetailError;

/// Per-category truncation on the home screen
pub const CATEGORY_LIMIT: usize = 8;
/// Backdrop poster paths kept from the popular listing
pub const BACKDROP_LIMIT: usize = 100;
/// Reviews shown on the detail screen
pub const REVIEW_LIMIT: usize = 5;
/// Similar titles shown on the detail screen
pub const SIMILAR_LIMIT: usize = 5;
/// Review content longer than this is truncated for display
pub const REVIEW_DISPLAY_LIMIT: usize = 300;

/// A movie record as returned by the category, search and similar listings
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Title {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
}

/// The full record behind the detail view. Same shape as `Title` today, but
/// kept as its own type since the detail endpoint is free to grow fields the
/// listings don't carry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TitleDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
}

/// A user review of a title
#[derive(Clone, Debug, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

impl Review {
    /// Review content as shown on the detail screen: anything beyond
    /// `REVIEW_DISPLAY_LIMIT` characters is cut there with a continuation
    /// marker. Display concern only; `content` stays untouched.
    pub fn display_content(&self) -> String {
        if self.content.chars().count() > REVIEW_DISPLAY_LIMIT {
            let truncated: String = self.content.chars().take(REVIEW_DISPLAY_LIMIT).collect();
            format!("{}...", truncated)
        } else {
            self.content.clone()
        }
    }
}

/// The merged home listing. Assembled in one piece once every category call
/// has settled and replaced wholesale, never patched per category.
#[derive(Clone, Debug, Default)]
pub struct HomeSnapshot {
    pub upcoming: Vec<Title>,
    pub latest: Option<Title>,
    pub top_rated: Vec<Title>,
    pub popular: Vec<Title>,
}

/// State slice backing the home screen
#[derive(Clone, Debug, Default)]
pub struct HomeState {
    pub snapshot: Option<HomeSnapshot>,
    /// Poster paths backing the hero section, filtered to non-null posters
    pub backdrops: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// State slice backing the search screen
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    /// The committed search term (the one the results belong to)
    pub term: String,
    pub results: Vec<Title>,
    pub loading: bool,
    pub error: Option<String>,
}

/// State slice backing the detail screen
#[derive(Clone, Debug, Default)]
pub struct DetailState {
    pub movie: Option<TitleDetail>,
    pub reviews: Vec<Review>,
    pub similar: Vec<Title>,
    pub loading: bool,
    pub error: Option<DetailError>,
}
