//! Controller behavior tests against a programmable fake gateway

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::model::{
    AppModel, Category, DetailError, GatewayError, MovieGateway, Review, Title, TitleDetail,
    ViewMode,
};

use super::AppController;

/// A canned gateway response. Errors are materialized at call time since
/// `GatewayError` is not `Clone`.
#[derive(Clone)]
enum Outcome<T> {
    Ok(T),
    Fail,
}

impl<T> Outcome<T> {
    fn into_result(self) -> Result<T, GatewayError> {
        match self {
            Outcome::Ok(v) => Ok(v),
            Outcome::Fail => Err(GatewayError::Decode("induced failure".to_string())),
        }
    }
}

#[derive(Default)]
struct FakeGateway {
    categories: StdMutex<HashMap<&'static str, Outcome<Vec<Title>>>>,
    searches: StdMutex<HashMap<String, (Duration, Outcome<Vec<Title>>)>>,
    details: StdMutex<HashMap<u64, (Duration, Outcome<Option<TitleDetail>>)>>,
    reviews: StdMutex<HashMap<u64, Outcome<Vec<Review>>>>,
    similar: StdMutex<HashMap<u64, Outcome<Vec<Title>>>>,
    category_calls: AtomicUsize,
    review_calls: AtomicUsize,
    similar_calls: AtomicUsize,
}

impl Default for Outcome<Vec<Title>> {
    fn default() -> Self {
        Outcome::Ok(Vec::new())
    }
}

impl FakeGateway {
    fn set_category(&self, category: Category, outcome: Outcome<Vec<Title>>) {
        self.categories
            .lock()
            .unwrap()
            .insert(category.path(), outcome);
    }

    fn set_search(&self, query: &str, delay: Duration, outcome: Outcome<Vec<Title>>) {
        self.searches
            .lock()
            .unwrap()
            .insert(query.to_string(), (delay, outcome));
    }

    fn set_detail(&self, id: u64, delay: Duration, outcome: Outcome<Option<TitleDetail>>) {
        self.details.lock().unwrap().insert(id, (delay, outcome));
    }

    fn set_reviews(&self, id: u64, outcome: Outcome<Vec<Review>>) {
        self.reviews.lock().unwrap().insert(id, outcome);
    }

    fn set_similar(&self, id: u64, outcome: Outcome<Vec<Title>>) {
        self.similar.lock().unwrap().insert(id, outcome);
    }
}

#[async_trait]
impl MovieGateway for FakeGateway {
    async fn movies(&self, category: Category) -> Result<Vec<Title>, GatewayError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .categories
            .lock()
            .unwrap()
            .get(category.path())
            .cloned()
            .unwrap_or_default();
        outcome.into_result()
    }

    async fn detail(&self, id: u64) -> Result<Option<TitleDetail>, GatewayError> {
        let (delay, outcome) = self
            .details
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or((Duration::ZERO, Outcome::Ok(None)));
        tokio::time::sleep(delay).await;
        outcome.into_result()
    }

    async fn reviews(&self, id: u64, _page: u32) -> Result<Vec<Review>, GatewayError> {
        self.review_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .reviews
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or(Outcome::Ok(Vec::new()));
        outcome.into_result()
    }

    async fn similar(&self, id: u64, _page: u32) -> Result<Vec<Title>, GatewayError> {
        self.similar_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .similar
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_default();
        outcome.into_result()
    }

    async fn search(&self, query: &str) -> Result<Vec<Title>, GatewayError> {
        let (delay, outcome) = self
            .searches
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or((Duration::ZERO, Outcome::Ok(Vec::new())));
        tokio::time::sleep(delay).await;
        outcome.into_result()
    }
}

fn titles(count: usize) -> Vec<Title> {
    (1..=count)
        .map(|i| Title {
            id: i as u64,
            title: format!("Movie {}", i),
            poster_path: Some(format!("/poster{}.jpg", i)),
            release_date: "2026-01-01".to_string(),
            overview: String::new(),
        })
        .collect()
}

fn detail_for(id: u64) -> TitleDetail {
    TitleDetail {
        id,
        title: format!("Detail {}", id),
        poster_path: Some("/d.jpg".to_string()),
        release_date: "2026-01-01".to_string(),
        overview: "plot".to_string(),
    }
}

fn reviews_by(author: &str, count: usize) -> Vec<Review> {
    (1..=count)
        .map(|i| Review {
            id: format!("{}-{}", author, i),
            author: author.to_string(),
            content: "good".to_string(),
        })
        .collect()
}

fn harness(gateway: FakeGateway) -> (AppController, Arc<Mutex<AppModel>>, Arc<FakeGateway>) {
    let gateway = Arc::new(gateway);
    let mut model = AppModel::new();
    model.set_gateway(gateway.clone());
    let model = Arc::new(Mutex::new(model));
    (AppController::new(model.clone()), model, gateway)
}

// ============================================================================
// Home aggregation
// ============================================================================

#[tokio::test]
async fn home_snapshot_truncates_and_filters_backdrops() {
    let gateway = FakeGateway::default();
    gateway.set_category(Category::Upcoming, Outcome::Ok(titles(12)));
    gateway.set_category(Category::Latest, Outcome::Ok(titles(1)));
    gateway.set_category(Category::TopRated, Outcome::Ok(titles(9)));

    // three popular entries without a poster must not back the hero
    let mut popular = titles(10);
    for title in popular.iter_mut().take(3) {
        title.poster_path = None;
    }
    gateway.set_category(Category::Popular, Outcome::Ok(popular));

    let (controller, model, _) = harness(gateway);
    controller.load_home().await;

    let home = model.lock().await.get_home_state().await;
    let snapshot = home.snapshot.expect("snapshot should be published");
    assert_eq!(snapshot.upcoming.len(), 8);
    assert_eq!(snapshot.top_rated.len(), 8);
    assert_eq!(snapshot.popular.len(), 8);
    assert!(snapshot.latest.is_some());
    assert_eq!(home.backdrops.len(), 7);
    assert!(!home.loading);
    assert!(home.error.is_none());
}

#[tokio::test]
async fn home_aggregation_fails_wholesale_on_single_failure() {
    let gateway = FakeGateway::default();
    gateway.set_category(Category::Upcoming, Outcome::Ok(titles(5)));
    gateway.set_category(Category::Latest, Outcome::Ok(titles(1)));
    gateway.set_category(Category::TopRated, Outcome::Fail);
    gateway.set_category(Category::Popular, Outcome::Ok(titles(5)));

    let (controller, model, _) = harness(gateway);
    controller.load_home().await;

    let home = model.lock().await.get_home_state().await;
    assert!(home.snapshot.is_none(), "no partial snapshot may be published");
    assert!(home.backdrops.is_empty());
    assert_eq!(home.error.as_deref(), Some("Failed to fetch movies"));
    assert!(!home.loading);
}

#[tokio::test]
async fn home_aggregation_runs_once_per_activation() {
    let gateway = FakeGateway::default();
    gateway.set_category(Category::Latest, Outcome::Ok(titles(1)));

    let (controller, _, gateway) = harness(gateway);
    controller.load_home().await;
    assert_eq!(gateway.category_calls.load(Ordering::SeqCst), 5);

    controller.load_home().await;
    assert_eq!(
        gateway.category_calls.load(Ordering::SeqCst),
        5,
        "re-activation must not refetch"
    );
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn empty_search_returns_home_and_clears_state() {
    let gateway = FakeGateway::default();
    gateway.set_search("batman", Duration::ZERO, Outcome::Ok(titles(3)));
    gateway.set_detail(1, Duration::ZERO, Outcome::Ok(Some(detail_for(1))));

    let (controller, model, _) = harness(gateway);
    controller.search("batman").await;
    controller.open_detail(1).await;
    assert_eq!(model.lock().await.get_view().await, ViewMode::Detail);

    controller.search("   ").await;

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Home);
    let search = guard.get_search_state().await;
    assert!(search.term.is_empty());
    assert!(search.results.is_empty());
    assert!(search.error.is_none());
    let detail = guard.get_detail_state().await;
    assert!(detail.movie.is_none());
    assert!(detail.reviews.is_empty());
    assert!(detail.similar.is_empty());
}

#[tokio::test]
async fn zero_match_search_is_success_not_error() {
    let gateway = FakeGateway::default();
    gateway.set_search("batman", Duration::ZERO, Outcome::Ok(Vec::new()));

    let (controller, model, _) = harness(gateway);
    controller.search("batman").await;

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Search);
    let search = guard.get_search_state().await;
    assert_eq!(search.term, "batman");
    assert!(search.results.is_empty());
    assert!(search.error.is_none());
    assert!(!search.loading);
}

#[tokio::test]
async fn failed_search_sets_error_and_keeps_view() {
    let gateway = FakeGateway::default();
    gateway.set_search("batman", Duration::ZERO, Outcome::Fail);

    let (controller, model, _) = harness(gateway);
    controller.search("batman").await;

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Home, "failure must not transition");
    let search = guard.get_search_state().await;
    assert_eq!(search.error.as_deref(), Some("Search failed"));
    assert!(!search.loading);
}

#[tokio::test(start_paused = true)]
async fn superseded_search_is_discarded_on_out_of_order_completion() {
    let gateway = FakeGateway::default();
    // The first search resolves long after the second one
    gateway.set_search("slow", Duration::from_millis(100), Outcome::Ok(titles(2)));
    gateway.set_search("fast", Duration::from_millis(10), Outcome::Ok(titles(5)));

    let (controller, model, _) = harness(gateway);

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.search("slow").await })
    };
    // Let the first invocation take its token before the second starts
    tokio::time::sleep(Duration::from_millis(1)).await;
    let second = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.search("fast").await })
    };

    first.await.unwrap();
    second.await.unwrap();

    let search = model.lock().await.get_search_state().await;
    assert_eq!(search.term, "fast", "last-initiated search must win");
    assert_eq!(search.results.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn empty_search_supersedes_inflight_search() {
    let gateway = FakeGateway::default();
    gateway.set_search("slow", Duration::from_millis(100), Outcome::Ok(titles(2)));

    let (controller, model, _) = harness(gateway);

    let inflight = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.search("slow").await })
    };
    tokio::time::sleep(Duration::from_millis(1)).await;

    // Submitting an empty term returns home; the in-flight search must not
    // pull the view back to Search when it resolves.
    controller.search("   ").await;
    assert_eq!(model.lock().await.get_view().await, ViewMode::Home);

    inflight.await.unwrap();

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Home);
    let search = guard.get_search_state().await;
    assert!(search.term.is_empty());
    assert!(search.results.is_empty());
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn not_found_detail_skips_dependents_and_keeps_view() {
    let gateway = FakeGateway::default();
    gateway.set_detail(42, Duration::ZERO, Outcome::Ok(None));

    let (controller, model, gateway) = harness(gateway);
    controller.open_detail(42).await;

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Home);
    let detail = guard.get_detail_state().await;
    assert_eq!(detail.error, Some(DetailError::NotFound));
    assert!(detail.movie.is_none());
    assert_eq!(gateway.review_calls.load(Ordering::SeqCst), 0);
    assert_eq!(gateway.similar_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn found_detail_loads_and_truncates_extras() {
    let gateway = FakeGateway::default();
    gateway.set_detail(42, Duration::ZERO, Outcome::Ok(Some(detail_for(42))));
    gateway.set_reviews(42, Outcome::Ok(reviews_by("critic", 9)));
    gateway.set_similar(42, Outcome::Ok(titles(7)));

    let (controller, model, _) = harness(gateway);
    controller.open_detail(42).await;

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Detail);
    let detail = guard.get_detail_state().await;
    assert_eq!(detail.movie.as_ref().map(|m| m.id), Some(42));
    assert_eq!(detail.reviews.len(), 5);
    assert_eq!(detail.similar.len(), 5);
    assert!(!detail.loading);
    assert!(detail.error.is_none());
}

#[tokio::test]
async fn detail_transport_failure_clears_and_keeps_view() {
    let gateway = FakeGateway::default();
    gateway.set_detail(42, Duration::ZERO, Outcome::Fail);

    let (controller, model, _) = harness(gateway);
    controller.open_detail(42).await;

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Home);
    let detail = guard.get_detail_state().await;
    assert_eq!(detail.error, Some(DetailError::FetchFailed));
    assert!(detail.movie.is_none());
}

#[tokio::test]
async fn dependent_failure_keeps_movie_in_detail_with_error() {
    let gateway = FakeGateway::default();
    gateway.set_detail(42, Duration::ZERO, Outcome::Ok(Some(detail_for(42))));
    gateway.set_reviews(42, Outcome::Fail);
    gateway.set_similar(42, Outcome::Ok(titles(3)));

    let (controller, model, _) = harness(gateway);
    controller.open_detail(42).await;

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Detail);
    let detail = guard.get_detail_state().await;
    assert_eq!(detail.movie.as_ref().map(|m| m.id), Some(42));
    assert_eq!(detail.error, Some(DetailError::FetchFailed));
    assert!(detail.reviews.is_empty());
    assert!(detail.similar.is_empty());
}

#[tokio::test(start_paused = true)]
async fn superseded_detail_never_mixes_titles() {
    let gateway = FakeGateway::default();
    gateway.set_detail(42, Duration::from_millis(100), Outcome::Ok(Some(detail_for(42))));
    gateway.set_reviews(42, Outcome::Ok(reviews_by("old", 2)));
    gateway.set_similar(42, Outcome::Ok(titles(2)));
    gateway.set_detail(99, Duration::from_millis(10), Outcome::Ok(Some(detail_for(99))));
    gateway.set_reviews(99, Outcome::Ok(reviews_by("new", 3)));
    gateway.set_similar(99, Outcome::Ok(titles(4)));

    let (controller, model, _) = harness(gateway);

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.open_detail(42).await })
    };
    tokio::time::sleep(Duration::from_millis(1)).await;
    let second = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.open_detail(99).await })
    };

    first.await.unwrap();
    second.await.unwrap();

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Detail);
    let detail = guard.get_detail_state().await;
    assert_eq!(detail.movie.as_ref().map(|m| m.id), Some(99));
    assert!(detail.reviews.iter().all(|r| r.author == "new"));
    assert_eq!(detail.similar.len(), 4);
}

// ============================================================================
// Back navigation
// ============================================================================

#[tokio::test]
async fn go_back_from_detail_resets_state_and_returns_home() {
    let gateway = FakeGateway::default();
    gateway.set_detail(42, Duration::ZERO, Outcome::Ok(Some(detail_for(42))));
    gateway.set_reviews(42, Outcome::Ok(reviews_by("critic", 2)));
    gateway.set_similar(42, Outcome::Ok(titles(2)));

    let (controller, model, _) = harness(gateway);
    controller.open_detail(42).await;
    assert_eq!(model.lock().await.get_view().await, ViewMode::Detail);

    controller.go_back().await;

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Home);
    let detail = guard.get_detail_state().await;
    assert!(detail.movie.is_none());
    assert!(detail.reviews.is_empty());
    assert!(detail.similar.is_empty());
    assert!(detail.error.is_none());
    assert!(!detail.loading);
}

#[tokio::test(start_paused = true)]
async fn go_back_supersedes_inflight_detail() {
    let gateway = FakeGateway::default();
    gateway.set_detail(42, Duration::from_millis(100), Outcome::Ok(Some(detail_for(42))));
    gateway.set_reviews(42, Outcome::Ok(reviews_by("critic", 2)));
    gateway.set_similar(42, Outcome::Ok(titles(2)));

    let (controller, model, _) = harness(gateway);

    let inflight = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.open_detail(42).await })
    };
    tokio::time::sleep(Duration::from_millis(1)).await;

    // Going back before the detail resolves must discard it; the late
    // result cannot re-enter the Detail view.
    controller.go_back().await;
    assert_eq!(model.lock().await.get_view().await, ViewMode::Home);

    inflight.await.unwrap();

    let guard = model.lock().await;
    assert_eq!(guard.get_view().await, ViewMode::Home);
    let detail = guard.get_detail_state().await;
    assert!(detail.movie.is_none());
    assert!(detail.reviews.is_empty());
    assert!(detail.similar.is_empty());
}
