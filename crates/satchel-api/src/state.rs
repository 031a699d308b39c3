//! Application state management

use satchel_core::{AppConfig, CompletionClient};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Completion backend. Injected at startup so tests can substitute a
    /// deterministic fake for the live client.
    pub client: Arc<dyn CompletionClient>,

    /// Server start time
    pub start_time: Instant,

    /// Relay request counter
    pub request_count: AtomicU64,
}

impl AppState {
    /// Create new application state with config and a completion backend
    pub fn new(config: AppConfig, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            config,
            client,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
