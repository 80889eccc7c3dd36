//! Configuration for the reference store and the matcher.
//!
//! Plain serde-derived structs with sensible defaults; nothing here is
//! required, the zero-config path works off the built-in fallback list.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Master configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamesiftConfig {
    /// Reference store configuration.
    pub store: StoreConfig,
    /// Matcher configuration.
    pub matcher: MatcherConfig,
}

/// Reference store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the primary reference file (first column is read as names)
    pub dataset_path: PathBuf,
    /// Whether the first line of the file is a header row and must be skipped
    pub has_header: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("combined_names.csv"),
            has_header: true,
        }
    }
}

/// Matcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Maximum number of ranked matches returned per query
    pub limit: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self { limit: 10 }
    }
}
