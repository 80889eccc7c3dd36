//! Error types for namesift operations.
//!
//! Errors here describe why the primary reference source could not be used.
//! None of them are fatal: the store recovers by substituting the built-in
//! fallback list and records the error as the reason.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for namesift operations.
#[derive(Debug, Error)]
pub enum NamesiftError {
    /// Reference file missing or unreadable
    #[error("reference source unavailable at {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reference file read fine but parsed to zero candidate names
    #[error("reference source at {} contains no names", .0.display())]
    EmptyDataset(PathBuf),
}

/// Result type alias for namesift operations
pub type Result<T> = std::result::Result<T, NamesiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NamesiftError::SourceUnavailable {
            path: PathBuf::from("names.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "reference source unavailable at names.csv: no such file"
        );

        let err = NamesiftError::EmptyDataset(PathBuf::from("empty.csv"));
        assert_eq!(
            err.to_string(),
            "reference source at empty.csv contains no names"
        );
    }
}
