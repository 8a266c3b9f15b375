use std::env;
use anyhow::{Context, Result};

const BASE_URL: &str = "https://api.themoviedb.org/3/movie";
const SEARCH_URL: &str = "https://api.themoviedb.org/3/search/movie";

const API_KEY_ENV: &str = "TMDB_API_KEY";

/// TMDB API configuration. The key is a static v3 API key, read from the
/// environment; everything else is fixed for the public TMDB deployment.
#[derive(Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub search_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .with_context(|| format!("{} environment variable not set", API_KEY_ENV))?;
        if api_key.trim().is_empty() {
            anyhow::bail!("{} is set but empty", API_KEY_ENV);
        }

        tracing::debug!("TMDB API key loaded from environment");

        Ok(Self {
            api_key,
            base_url: BASE_URL.to_string(),
            search_url: SEARCH_URL.to_string(),
        })
    }
}
