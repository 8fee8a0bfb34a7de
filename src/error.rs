//! Error types.
//!
//! Empty search results are never errors: an over-constrained selection or
//! an exhausted budget simply produces zero combinations. Errors are reserved
//! for inputs the engine cannot interpret.

use thiserror::Error;

use crate::catalog::Category;

/// Failure while building or loading a [`Catalog`](crate::catalog::Catalog).
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "loader")]
    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("duplicate {category} '{name}'")]
    DuplicateItem { category: Category, name: String },

    #[error("{category} '{name}' has invalid {field}: {value}")]
    InvalidValue {
        category: Category,
        name: String,
        field: &'static str,
        value: f64,
    },
}

/// Failure while answering a search query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("unknown {category} '{name}'")]
    UnknownItem { category: Category, name: String },

    #[error("{category} '{name}' is pinned more than once")]
    DuplicatePick { category: Category, name: String },

    #[error("{picked} {category}s pinned but only {slots} slots available")]
    TooManyPicks {
        category: Category,
        picked: usize,
        slots: usize,
    },

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Invalid constants for the rank estimator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankModelError {
    #[error("max_score ({max}) must be greater than min_score ({min})")]
    EmptyRange { min: f64, max: f64 },

    #[error("rank model constants must be finite")]
    NonFinite,

    #[error("survey found no feasible lineups")]
    NoFeasibleLineups,
}
