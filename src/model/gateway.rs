//! The remote metadata gateway boundary
//!
//! Controllers only ever talk to the remote API through `MovieGateway`, so
//! the whole orchestration layer can be exercised against a fake in tests.

use async_trait::async_trait;
use thiserror::Error;

use super::catalog::{Review, Title, TitleDetail};

/// The four fixed remote category listings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Upcoming,
    Latest,
    TopRated,
    Popular,
}

impl Category {
    /// URL path segment under the movie base URL
    pub fn path(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Latest => "latest",
            Self::TopRated => "top_rated",
            Self::Popular => "popular",
        }
    }
}

/// Transport or parse failure talking to the remote API. A remote "title not
/// found" is not a `GatewayError`; `detail` reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Detail-load outcomes surfaced on the detail state slice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("Movie not found")]
    NotFound,
    #[error("Failed to load movie details")]
    FetchFailed,
}

/// Read-only access to the remote movie-metadata API. All methods are
/// idempotent queries; there is no mutation capability.
#[async_trait]
pub trait MovieGateway: Send + Sync {
    /// Fetch one category listing. The `latest` endpoint returns a single
    /// object upstream; implementations normalize it to a one-element list
    /// so all four categories share this contract.
    async fn movies(&self, category: Category) -> Result<Vec<Title>, GatewayError>;

    /// Fetch the full record for one title. `Ok(None)` means the remote
    /// explicitly reported the id as unknown, as opposed to a transport
    /// failure.
    async fn detail(&self, id: u64) -> Result<Option<TitleDetail>, GatewayError>;

    async fn reviews(&self, id: u64, page: u32) -> Result<Vec<Review>, GatewayError>;

    async fn similar(&self, id: u64, page: u32) -> Result<Vec<Title>, GatewayError>;

    async fn search(&self, query: &str) -> Result<Vec<Title>, GatewayError>;
}
