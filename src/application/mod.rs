//! Application layer containing the classification logic and its orchestration.
//!
//! `engine` holds the ordered rule table and the pure `ClassificationEngine`.
//! `processor` wraps the engine with request decoding and a bounded history
//! that can be shared across `tokio` tasks.

pub mod engine;
pub mod processor;
