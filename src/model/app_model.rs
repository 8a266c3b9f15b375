//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::catalog::{DetailState, HomeSnapshot, HomeState, Review, SearchState, Title, TitleDetail};
use super::gateway::{DetailError, MovieGateway};
use super::types::{ActiveSection, HomeSection, UiState, ViewMode};

/// Main application model containing all state.
///
/// The four render-facing slices (home, search, detail, view mode) are each
/// behind their own lock; controllers mutate only the slice they own, and
/// only after their async work completes.
pub struct AppModel {
    pub gateway: Option<Arc<dyn MovieGateway>>,
    home_state: Arc<Mutex<HomeState>>,
    search_state: Arc<Mutex<SearchState>>,
    detail_state: Arc<Mutex<DetailState>>,
    view_mode: Arc<Mutex<ViewMode>>,
    pub ui_state: Arc<Mutex<UiState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            gateway: None,
            home_state: Arc::new(Mutex::new(HomeState::default())),
            search_state: Arc::new(Mutex::new(SearchState::default())),
            detail_state: Arc::new(Mutex::new(DetailState::default())),
            view_mode: Arc::new(Mutex::new(ViewMode::Home)),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_gateway(&mut self, gateway: Arc<dyn MovieGateway>) {
        self.gateway = Some(gateway);
    }

    pub async fn get_gateway(&self) -> Option<Arc<dyn MovieGateway>> {
        self.gateway.clone()
    }

    // ========================================================================
    // View mode
    // ========================================================================

    pub async fn get_view(&self) -> ViewMode {
        *self.view_mode.lock().await
    }

    pub async fn set_view(&self, view: ViewMode) {
        *self.view_mode.lock().await = view;
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // Home slice
    // ========================================================================

    pub async fn get_home_state(&self) -> HomeState {
        self.home_state.lock().await.clone()
    }

    /// True once the session's single home aggregation has been kicked off
    /// (or has already completed or failed). Used to keep `load_home` from
    /// running more than once per activation.
    pub async fn home_activation_started(&self) -> bool {
        let state = self.home_state.lock().await;
        state.loading || state.snapshot.is_some() || state.error.is_some()
    }

    pub async fn set_home_loading(&self) {
        let mut state = self.home_state.lock().await;
        state.loading = true;
        state.error = None;
    }

    /// Publish the merged home snapshot wholesale. Called exactly once after
    /// every category call has settled successfully.
    pub async fn publish_home(&self, snapshot: HomeSnapshot, backdrops: Vec<String>) {
        let mut state = self.home_state.lock().await;
        state.snapshot = Some(snapshot);
        state.backdrops = backdrops;
        state.loading = false;
        state.error = None;
    }

    pub async fn fail_home(&self, message: String) {
        let mut state = self.home_state.lock().await;
        state.snapshot = None;
        state.backdrops.clear();
        state.loading = false;
        state.error = Some(message);
    }

    // ========================================================================
    // Search slice
    // ========================================================================

    pub async fn get_search_state(&self) -> SearchState {
        self.search_state.lock().await.clone()
    }

    pub async fn begin_search(&self) {
        let mut state = self.search_state.lock().await;
        state.loading = true;
        state.error = None;
    }

    /// Replace the results atomically for the given committed term
    pub async fn commit_search_results(&self, term: String, results: Vec<Title>) {
        let mut state = self.search_state.lock().await;
        state.term = term;
        state.results = results;
        state.loading = false;
        state.error = None;
        drop(state);

        let mut ui = self.ui_state.lock().await;
        ui.search_selected = 0;
    }

    pub async fn fail_search(&self, message: String) {
        let mut state = self.search_state.lock().await;
        state.loading = false;
        state.error = Some(message);
    }

    pub async fn clear_search(&self) {
        *self.search_state.lock().await = SearchState::default();
        let mut ui = self.ui_state.lock().await;
        ui.search_selected = 0;
    }

    // ========================================================================
    // Detail slice
    // ========================================================================

    pub async fn get_detail_state(&self) -> DetailState {
        self.detail_state.lock().await.clone()
    }

    pub async fn begin_detail(&self) {
        let mut state = self.detail_state.lock().await;
        state.loading = true;
        state.error = None;
    }

    /// Commit the primary detail record. Reviews and similar titles arrive
    /// separately once their concurrent fetches have both settled.
    pub async fn commit_detail_movie(&self, movie: TitleDetail) {
        let mut state = self.detail_state.lock().await;
        state.movie = Some(movie);
        state.reviews.clear();
        state.similar.clear();
        drop(state);

        let mut ui = self.ui_state.lock().await;
        ui.similar_selected = 0;
    }

    pub async fn commit_detail_extras(&self, reviews: Vec<Review>, similar: Vec<Title>) {
        let mut state = self.detail_state.lock().await;
        state.reviews = reviews;
        state.similar = similar;
        state.loading = false;
    }

    /// Record a detail failure. `clear_movie` distinguishes the primary
    /// request failing (nothing to show) from a dependent reviews/similar
    /// failure (the movie stays visible in the Detail-with-error sub-state).
    pub async fn fail_detail(&self, error: DetailError, clear_movie: bool) {
        let mut state = self.detail_state.lock().await;
        if clear_movie {
            state.movie = None;
        }
        state.reviews.clear();
        state.similar.clear();
        state.loading = false;
        state.error = Some(error);
    }

    pub async fn clear_detail(&self) {
        *self.detail_state.lock().await = DetailState::default();
        let mut ui = self.ui_state.lock().await;
        ui.similar_selected = 0;
    }

    // ========================================================================
    // UI state (focus, search input, selections)
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn toggle_active_section(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.active_section = ui.active_section.next();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut ui = self.ui_state.lock().await;
        ui.active_section = section;
    }

    pub async fn append_to_search_input(&self, c: char) {
        let mut ui = self.ui_state.lock().await;
        ui.search_input.push(c);
    }

    pub async fn backspace_search_input(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.search_input.pop();
    }

    pub async fn clear_search_input(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.search_input.clear();
    }

    pub async fn cycle_home_section(&self, forward: bool) {
        let mut ui = self.ui_state.lock().await;
        ui.home_section = if forward {
            ui.home_section.next()
        } else {
            ui.home_section.prev()
        };
    }

    pub async fn move_selection_up(&self) {
        let view = self.get_view().await;
        let mut ui = self.ui_state.lock().await;
        let section = ui.home_section;
        let idx = match view {
            ViewMode::Home => match section {
                HomeSection::Upcoming => &mut ui.upcoming_selected,
                HomeSection::TopRated => &mut ui.top_rated_selected,
                HomeSection::Popular => &mut ui.popular_selected,
            },
            ViewMode::Search => &mut ui.search_selected,
            ViewMode::Detail => &mut ui.similar_selected,
        };
        if *idx > 0 {
            *idx -= 1;
        }
    }

    pub async fn move_selection_down(&self) {
        let view = self.get_view().await;
        match view {
            ViewMode::Home => {
                let home = self.home_state.lock().await;
                let Some(snapshot) = &home.snapshot else {
                    return;
                };
                let mut ui = self.ui_state.lock().await;
                let section = ui.home_section;
                let (idx, len) = match section {
                    HomeSection::Upcoming => (&mut ui.upcoming_selected, snapshot.upcoming.len()),
                    HomeSection::TopRated => (&mut ui.top_rated_selected, snapshot.top_rated.len()),
                    HomeSection::Popular => (&mut ui.popular_selected, snapshot.popular.len()),
                };
                if *idx < len.saturating_sub(1) {
                    *idx += 1;
                }
            }
            ViewMode::Search => {
                let search = self.search_state.lock().await;
                let len = search.results.len();
                drop(search);
                let mut ui = self.ui_state.lock().await;
                if ui.search_selected < len.saturating_sub(1) {
                    ui.search_selected += 1;
                }
            }
            ViewMode::Detail => {
                let detail = self.detail_state.lock().await;
                let len = detail.similar.len();
                drop(detail);
                let mut ui = self.ui_state.lock().await;
                if ui.similar_selected < len.saturating_sub(1) {
                    ui.similar_selected += 1;
                }
            }
        }
    }

    /// The id of the title the cursor is on, for the current view
    pub async fn selected_title_id(&self) -> Option<u64> {
        let view = self.get_view().await;
        let ui = self.ui_state.lock().await;
        match view {
            ViewMode::Home => {
                let home = self.home_state.lock().await;
                let snapshot = home.snapshot.as_ref()?;
                let (list, idx) = match ui.home_section {
                    HomeSection::Upcoming => (&snapshot.upcoming, ui.upcoming_selected),
                    HomeSection::TopRated => (&snapshot.top_rated, ui.top_rated_selected),
                    HomeSection::Popular => (&snapshot.popular, ui.popular_selected),
                };
                list.get(idx).map(|t| t.id)
            }
            ViewMode::Search => {
                let search = self.search_state.lock().await;
                search.results.get(ui.search_selected).map(|t| t.id)
            }
            ViewMode::Detail => {
                let detail = self.detail_state.lock().await;
                detail.similar.get(ui.similar_selected).map(|t| t.id)
            }
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
