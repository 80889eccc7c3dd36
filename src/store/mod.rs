//! Reference store: the fixed universe of candidate names.
//!
//! Names come from a tabular file (first column, one name per row) and are
//! loaded once per process. A missing or unusable file is not an error at
//! this level: the store degrades to a small built-in list and remembers why,
//! so the boundary can surface a notice instead of failing.

use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::error::{NamesiftError, Result};

/// Built-in names used when the primary reference file is unavailable.
pub const FALLBACK_NAMES: [&str; 23] = [
    "Geetha",
    "Gita",
    "Geeta",
    "Rahul",
    "Raahul",
    "Mohammed",
    "Mohd",
    "Deepak",
    "Dipak",
    "Priya",
    "Amit",
    "Anjali",
    "Vikram",
    "Suresh",
    "Aditi",
    "Rohan",
    "Meera",
    "Catherine",
    "Katherine",
    "John",
    "Jon",
    "Steven",
    "Stephen",
];

/// Where the loaded names came from.
#[derive(Debug)]
pub enum DataOrigin {
    /// Names were read from the configured reference file.
    Primary(std::path::PathBuf),
    /// The primary source was unusable; the built-in list is in effect.
    Fallback(NamesiftError),
}

/// An immutable, ordered collection of candidate names.
#[derive(Debug)]
pub struct ReferenceStore {
    names: Vec<String>,
    origin: DataOrigin,
}

impl ReferenceStore {
    /// Load names according to `cfg`. Never fails: any problem with the
    /// primary source degrades to [`FALLBACK_NAMES`].
    pub fn load(cfg: &StoreConfig) -> Self {
        match read_first_column(&cfg.dataset_path, cfg.has_header) {
            Ok(names) => {
                info!(
                    dataset = %cfg.dataset_path.display(),
                    names = names.len(),
                    "reference store loaded"
                );
                Self {
                    names,
                    origin: DataOrigin::Primary(cfg.dataset_path.clone()),
                }
            }
            Err(reason) => {
                warn!(%reason, "using built-in fallback names");
                Self {
                    names: FALLBACK_NAMES.iter().map(|s| s.to_string()).collect(),
                    origin: DataOrigin::Fallback(reason),
                }
            }
        }
    }

    /// Process-wide store, loaded on first access and cached for the rest of
    /// the process lifetime. `cfg` is only consulted on the first call;
    /// subsequent calls return the cached store without re-reading anything.
    pub fn shared(cfg: &StoreConfig) -> &'static ReferenceStore {
        static STORE: OnceCell<ReferenceStore> = OnceCell::new();
        STORE.get_or_init(|| Self::load(cfg))
    }

    /// The candidate names, in source order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Borrowed view suitable for feeding the matcher.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn origin(&self) -> &DataOrigin {
        &self.origin
    }

    /// True when the built-in fallback list is in effect.
    pub fn is_degraded(&self) -> bool {
        matches!(self.origin, DataOrigin::Fallback(_))
    }
}

/// Read the first comma-delimited column of each non-empty line as a name.
/// Surrounding double quotes are stripped. An unreadable file or a file with
/// no usable rows is an error for the caller to recover from.
fn read_first_column(path: &Path, has_header: bool) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| NamesiftError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let skip = usize::from(has_header);
    let mut names = Vec::new();
    for line in contents.lines().skip(skip) {
        let field = line
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches('"')
            .trim();
        if !field.is_empty() {
            names.push(field.to_string());
        }
    }

    if names.is_empty() {
        return Err(NamesiftError::EmptyDataset(path.to_path_buf()));
    }
    Ok(names)
}
