//! Title detail loading

use crate::model::{ActiveSection, DetailError, ViewMode, REVIEW_LIMIT, SIMILAR_LIMIT};

use super::AppController;

impl AppController {
    /// Open the detail view for a title. The primary detail request runs
    /// first; a remote not-found stops there (no review/similar calls, no
    /// view change, prior detail cleared). On primary success the movie is
    /// committed and the view enters Detail immediately, then reviews and
    /// similar titles are fetched concurrently and merged once both settle.
    ///
    /// Re-invocations are resolved last-initiated-wins: a stale task never
    /// commits, so rapid clicks can't interleave two titles' data.
    pub async fn open_detail(&self, id: u64) {
        let token = self.next_detail_token();

        let model = self.model.lock().await;
        let Some(gateway) = model.get_gateway().await else {
            return;
        };
        model.begin_detail().await;
        drop(model);

        tracing::info!(id, "loading title detail");
        let primary = gateway.detail(id).await;

        {
            let model = self.model.lock().await;
            if !self.detail_token_current(token) {
                tracing::debug!(id, token, "discarding superseded detail result");
                return;
            }
            match primary {
                Ok(Some(movie)) => {
                    model.commit_detail_movie(movie).await;
                    model.set_view(ViewMode::Detail).await;
                    model.set_active_section(ActiveSection::Content).await;
                }
                Ok(None) => {
                    tracing::warn!(id, "title not found");
                    model.fail_detail(DetailError::NotFound, true).await;
                    return;
                }
                Err(e) => {
                    tracing::error!(id, error = %e, "detail fetch failed");
                    model.fail_detail(DetailError::FetchFailed, true).await;
                    return;
                }
            }
        }

        // Reviews and similar titles are independent of each other; fetch
        // them concurrently and commit only the merged outcome.
        let (reviews, similar) = futures::join!(gateway.reviews(id, 1), gateway.similar(id, 1));

        let model = self.model.lock().await;
        if !self.detail_token_current(token) {
            tracing::debug!(id, token, "discarding superseded detail extras");
            return;
        }

        match (reviews, similar) {
            (Ok(reviews), Ok(similar)) => {
                model
                    .commit_detail_extras(
                        reviews.into_iter().take(REVIEW_LIMIT).collect(),
                        similar.into_iter().take(SIMILAR_LIMIT).collect(),
                    )
                    .await;
            }
            (reviews, similar) => {
                if let Err(e) = &reviews {
                    tracing::error!(id, error = %e, "reviews fetch failed");
                }
                if let Err(e) = &similar {
                    tracing::error!(id, error = %e, "similar fetch failed");
                }
                // The movie itself loaded; stay in Detail with the error
                // surfaced in place.
                model.fail_detail(DetailError::FetchFailed, false).await;
            }
        }
    }
}
