//! Satchel API - HTTP relay server
//!
//! One endpoint: POST a question plus retrieval context on any path, get
//! back the completion answer as JSON. OPTIONS preflights succeed on any
//! path, and every response carries permissive cross-origin headers.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::create_router;
