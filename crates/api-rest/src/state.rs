//! Application state shared across all requests.

use crate::config::ApiConfig;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    started_at: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Time since the state was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
