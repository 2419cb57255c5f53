//! # dictowl store
//!
//! Read-only metadata for external vocabulary terms: preferred label,
//! synonyms, definition and parent terms. Tables are loaded once, optionally
//! gzip-compressed, and later tables overwrite earlier ones column by column.

pub mod store;

pub use store::{split_list, KeyNormalizer, TermLookup, TermStore, TermStoreBuilder};

use std::path::PathBuf;
use thiserror::Error;

/// Header names of the term tables
pub mod columns {
    pub const CLASS_ID: &str = "Class ID";
    pub const PREFERRED_LABEL: &str = "Preferred Label";
    pub const SYNONYMS: &str = "Synonyms";
    pub const PARENTS: &str = "Parents";
    pub const DEFINITION: &str = "definition";
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to open term table {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read term table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Term table is missing required column '{0}'")]
    MissingColumn(&'static str),
}
