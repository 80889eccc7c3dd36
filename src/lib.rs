//! Fuzzy name lookup against a static reference list.
//!
//! The crate has two working parts: [`store`], which loads and caches the
//! candidate names, and [`matcher`], which ranks them against a query with a
//! token-order-insensitive edit-distance ratio. Everything else is plumbing
//! around those two.

/// Configuration for the store and matcher
pub mod config;
/// Error types
pub mod error;
/// Logging and tracing setup
pub mod logging;
/// Similarity scoring and top-K ranking
pub mod matcher;
/// Candidate name loading and caching
pub mod store;

pub use config::{MatcherConfig, NamesiftConfig, StoreConfig};
pub use error::{NamesiftError, Result};
pub use store::ReferenceStore;
