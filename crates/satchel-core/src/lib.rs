//! Satchel Core - shared types and traits for the relay
//!
//! This crate defines the abstractions used throughout the relay:
//! - Common error types
//! - Prompt and completion types exchanged with the completion service
//! - The `CompletionClient` trait implemented by provider backends
//! - Configuration management

pub mod config;

pub use config::{AppConfig, ConfigError, LlmConfig, LoggingConfig, ServerConfig};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for relay operations
#[derive(Error, Debug)]
pub enum RelayError {
    /// Startup misconfiguration, such as a missing credential.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure: connection refused, timeout, or an
    /// unparseable provider body.
    #[error("completion request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status. The full response
    /// payload is kept so callers can relay it for diagnostics.
    #[error("{message}")]
    Provider {
        message: String,
        raw: serde_json::Value,
    },
}

pub type Result<T> = std::result::Result<T, RelayError>;

// ============================================================================
// Prompt and Completion Types
// ============================================================================

/// The composed prompt sent to the completion service: a fixed instruction
/// block plus the per-request user content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptBundle {
    pub instructions: String,
    pub input: String,
}

/// The extracted result of one completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Answer text recovered from the provider response.
    pub answer: String,

    /// Model name the relay is configured with.
    pub model: String,
}

// ============================================================================
// Traits
// ============================================================================

/// Trait for completion backends.
///
/// The relay makes exactly one `complete` call per inbound request; there is
/// no retry or queueing on top of this interface. Tests substitute a
/// deterministic implementation for the live client.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one prompt and return the extracted completion.
    async fn complete(&self, prompt: &PromptBundle) -> Result<Completion>;
}

// ============================================================================
// Tests
// ============================================================================
