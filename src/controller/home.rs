//! Initial category aggregation for the home screen

use crate::model::{Category, GatewayError, HomeSnapshot, Title, BACKDROP_LIMIT, CATEGORY_LIMIT};

use super::AppController;

const AGGREGATION_ERROR: &str = "Failed to fetch movies";

impl AppController {
    /// Load the home screen: four category listings plus a second popular
    /// call backing the hero backdrops, all issued concurrently. The merged
    /// snapshot is published only after every call has settled; a single
    /// failure fails the whole aggregation and publishes nothing. Runs once
    /// per session activation; later calls are no-ops.
    pub async fn load_home(&self) {
        let model = self.model.lock().await;
        if model.home_activation_started().await {
            tracing::debug!("home aggregation already started, skipping");
            return;
        }
        let Some(gateway) = model.get_gateway().await else {
            return;
        };
        model.set_home_loading().await;
        drop(model);

        tracing::info!("loading home categories");

        let (upcoming, latest, top_rated, popular, backdrop_source) = futures::join!(
            gateway.movies(Category::Upcoming),
            gateway.movies(Category::Latest),
            gateway.movies(Category::TopRated),
            gateway.movies(Category::Popular),
            gateway.movies(Category::Popular),
        );

        log_category_error(Category::Upcoming, &upcoming);
        log_category_error(Category::Latest, &latest);
        log_category_error(Category::TopRated, &top_rated);
        log_category_error(Category::Popular, &popular);
        log_category_error(Category::Popular, &backdrop_source);

        let model = self.model.lock().await;
        match (upcoming, latest, top_rated, popular, backdrop_source) {
            (Ok(upcoming), Ok(latest), Ok(top_rated), Ok(popular), Ok(backdrop_source)) => {
                let snapshot = HomeSnapshot {
                    upcoming: truncate(upcoming),
                    latest: latest.into_iter().next(),
                    top_rated: truncate(top_rated),
                    popular: truncate(popular),
                };
                let backdrops: Vec<String> = backdrop_source
                    .into_iter()
                    .filter_map(|title| title.poster_path)
                    .take(BACKDROP_LIMIT)
                    .collect();

                tracing::info!(
                    upcoming = snapshot.upcoming.len(),
                    top_rated = snapshot.top_rated.len(),
                    popular = snapshot.popular.len(),
                    backdrops = backdrops.len(),
                    "home snapshot published"
                );
                model.publish_home(snapshot, backdrops).await;
            }
            _ => {
                model.fail_home(AGGREGATION_ERROR.to_string()).await;
            }
        }
    }
}

fn truncate(titles: Vec<Title>) -> Vec<Title> {
    titles.into_iter().take(CATEGORY_LIMIT).collect()
}

fn log_category_error(category: Category, result: &Result<Vec<Title>, GatewayError>) {
    if let Err(e) = result {
        tracing::error!(category = category.path(), error = %e, "category fetch failed");
    }
}
