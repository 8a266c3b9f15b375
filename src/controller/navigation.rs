//! Back navigation and list selection

use crate::model::ViewMode;

use super::AppController;

impl AppController {
    /// Explicit "back" action: always returns to Home and fully clears the
    /// search and detail slices. The home snapshot is untouched (it is
    /// loaded once per session, not re-fetched on the way back).
    pub async fn go_back(&self) {
        // Going home supersedes any in-flight search or detail load so a
        // late result cannot transition the view again.
        self.supersede_inflight();
        let model = self.model.lock().await;
        model.clear_search().await;
        model.clear_detail().await;
        model.set_view(ViewMode::Home).await;
    }

    /// Open the title under the cursor in the current view
    pub(crate) async fn open_selected(&self) {
        let model = self.model.lock().await;
        let selected = model.selected_title_id().await;
        drop(model);

        if let Some(id) = selected {
            let controller = self.clone();
            tokio::spawn(async move {
                controller.open_detail(id).await;
            });
        }
    }
}
