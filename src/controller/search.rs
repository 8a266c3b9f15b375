//! Free-text search

use crate::model::{ActiveSection, ViewMode};

use super::AppController;

const SEARCH_ERROR: &str = "Search failed";

impl AppController {
    /// Run a search for `term`. A trimmed-empty term is not an error: it is
    /// a request to leave search and return home, clearing prior search and
    /// detail state. Otherwise one query is issued; the view switches to
    /// Search only on success (a zero-match result is success). On transport
    /// failure the error lands on the search slice and the view stays put.
    ///
    /// Concurrent invocations are resolved last-initiated-wins: a result
    /// whose token has been superseded is discarded without touching state.
    pub async fn search(&self, term: &str) {
        let trimmed = term.trim();

        if trimmed.is_empty() {
            tracing::debug!("empty search term, returning home");
            // This branch supersedes in-flight work too: a search or detail
            // load started earlier must not commit after the user went home.
            self.supersede_inflight();
            let model = self.model.lock().await;
            model.clear_search().await;
            model.clear_detail().await;
            model.set_view(ViewMode::Home).await;
            return;
        }

        let token = self.next_search_token();

        let model = self.model.lock().await;
        let Some(gateway) = model.get_gateway().await else {
            return;
        };
        model.begin_search().await;
        drop(model);

        let result = gateway.search(trimmed).await;

        let model = self.model.lock().await;
        if !self.search_token_current(token) {
            tracing::debug!(term = trimmed, token, "discarding superseded search result");
            return;
        }

        match result {
            Ok(results) => {
                tracing::info!(term = trimmed, count = results.len(), "search completed");
                model
                    .commit_search_results(trimmed.to_string(), results)
                    .await;
                model.set_view(ViewMode::Search).await;
                model.set_active_section(ActiveSection::Content).await;
            }
            Err(e) => {
                tracing::error!(term = trimmed, error = %e, "search failed");
                model.fail_search(SEARCH_ERROR.to_string()).await;
            }
        }
    }
}
