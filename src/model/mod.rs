//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (view mode, focus, UI state)
//! - `catalog`: Home/search/detail data and state slices
//! - `gateway`: The remote metadata API boundary (trait + error kinds)
//! - `tmdb_client`: TMDB implementation of the gateway
//! - `app_model`: Main application model with state management methods

mod types;
mod catalog;
mod gateway;
mod tmdb_client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, HomeSection, UiState, ViewMode};

pub use catalog::{
    DetailState, HomeSnapshot, HomeState, Review, SearchState, Title, TitleDetail,
    BACKDROP_LIMIT, CATEGORY_LIMIT, REVIEW_LIMIT, SIMILAR_LIMIT,
};

pub use gateway::{Category, DetailError, GatewayError, MovieGateway};

pub use tmdb_client::TmdbClient;

pub use app_model::AppModel;
