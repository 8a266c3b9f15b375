//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates the remote fetches behind each view. It is organized into
//! submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `home`: Initial category aggregation
//! - `search`: Free-text search
//! - `detail`: Title detail loading
//! - `navigation`: Back navigation and list selection

mod input;
mod home;
mod search;
mod detail;
mod navigation;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use crate::model::AppModel;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    /// Monotonic invocation counters for search and detail. A task records
    /// its token at initiation and commits only while still current, so a
    /// superseded request can never overwrite a newer one's result.
    search_seq: Arc<AtomicU64>,
    detail_seq: Arc<AtomicU64>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self {
            model,
            search_seq: Arc::new(AtomicU64::new(0)),
            detail_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) fn next_search_token(&self) -> u64 {
        self.search_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn search_token_current(&self, token: u64) -> bool {
        self.search_seq.load(Ordering::SeqCst) == token
    }

    pub(crate) fn next_detail_token(&self) -> u64 {
        self.detail_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn detail_token_current(&self, token: u64) -> bool {
        self.detail_seq.load(Ordering::SeqCst) == token
    }

    /// Invalidate every in-flight search and detail task. Returning home
    /// counts as a newer initiation, so a result that resolves afterwards
    /// fails its commit check instead of pulling the view back.
    pub(crate) fn supersede_inflight(&self) {
        self.search_seq.fetch_add(1, Ordering::SeqCst);
        self.detail_seq.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests;
