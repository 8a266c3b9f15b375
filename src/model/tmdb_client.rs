//! TMDB API client implementing the gateway boundary

use serde::Deserialize;
use urlencoding::encode;

use crate::config::ApiConfig;
use super::catalog::{Review, Title, TitleDetail};
use super::gateway::{Category, GatewayError, MovieGateway};

/// Thin reqwest wrapper over the TMDB v3 movie endpoints
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    config: ApiConfig,
}

/// A paged TMDB listing. `results` is missing entirely on some error
/// payloads, so it is optional here and normalized to an empty list.
#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    results: Option<Vec<Title>>,
}

/// A paged review listing
#[derive(Debug, Deserialize)]
struct RawReviewPage {
    #[serde(default)]
    results: Option<Vec<Review>>,
}

/// Detail response envelope. TMDB reports an unknown id with a
/// `status_code` body instead of a movie record.
#[derive(Debug, Deserialize)]
struct RawDetail {
    #[serde(default)]
    status_code: Option<i64>,
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    overview: String,
}

impl TmdbClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn fetch_page(&self, url: String) -> Result<Vec<Title>, GatewayError> {
        let page: RawPage = self.http.get(url).send().await?.json().await?;
        Ok(page.results.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl MovieGateway for TmdbClient {
    async fn movies(&self, category: Category) -> Result<Vec<Title>, GatewayError> {
        tracing::debug!(category = category.path(), "API: movies");
        let url = format!(
            "{}/{}?api_key={}",
            self.config.base_url,
            category.path(),
            self.config.api_key
        );

        // `latest` is a single object, not a results page
        if category == Category::Latest {
            let title: Title = self.http.get(url).send().await?.json().await?;
            return Ok(vec![title]);
        }

        self.fetch_page(url).await
    }

    async fn detail(&self, id: u64) -> Result<Option<TitleDetail>, GatewayError> {
        tracing::debug!(id, "API: detail");
        let url = format!(
            "{}/{}?api_key={}&language=en-US",
            self.config.base_url, id, self.config.api_key
        );
        let raw: RawDetail = self.http.get(url).send().await?.json().await?;

        if raw.status_code.is_some() {
            tracing::debug!(id, status_code = ?raw.status_code, "TMDB reported title not found");
            return Ok(None);
        }

        let movie_id = raw
            .id
            .ok_or_else(|| GatewayError::Decode("detail response missing id".to_string()))?;

        Ok(Some(TitleDetail {
            id: movie_id,
            title: raw.title,
            poster_path: raw.poster_path,
            release_date: raw.release_date,
            overview: raw.overview,
        }))
    }

    async fn reviews(&self, id: u64, page: u32) -> Result<Vec<Review>, GatewayError> {
        tracing::debug!(id, page, "API: reviews");
        let url = format!(
            "{}/{}/reviews?api_key={}&language=en-US&page={}",
            self.config.base_url, id, self.config.api_key, page
        );
        let raw: RawReviewPage = self.http.get(url).send().await?.json().await?;
        Ok(raw.results.unwrap_or_default())
    }

    async fn similar(&self, id: u64, page: u32) -> Result<Vec<Title>, GatewayError> {
        tracing::debug!(id, page, "API: similar");
        let url = format!(
            "{}/{}/similar?api_key={}&language=en-US&page={}",
            self.config.base_url, id, self.config.api_key, page
        );
        self.fetch_page(url).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Title>, GatewayError> {
        tracing::debug!(query, "API: search");
        let url = format!(
            "{}?api_key={}&query={}",
            self.config.search_url,
            self.config.api_key,
            encode(query)
        );
        self.fetch_page(url).await
    }
}
