//! Exhaustive lineup search under a shared budget cap.
//!
//! Given a [`Catalog`](crate::catalog::Catalog) and a partial
//! [`Selection`](crate::catalog::Selection), the engine enumerates every
//! way to fill the open driver and team slots and keeps the combinations
//! whose total cost fits the budget.
//!
//! # Key Components
//!
//! - **Enumerator**: [`Combinations`], [`pairs`] — lazy lexicographic
//!   `k`-subsets and their cross product
//! - **Feasibility**: [`fits`] — inclusive budget test shared by every query
//! - **Ranker**: [`LineupSearch::rank`] — top-N by total score, stable on ties
//! - **Counter**: [`LineupSearch::count`] — pruned count of the same
//!   feasible set
//!
//! Queries are pure functions of the catalog, the configuration and the
//! selection. Nothing is cached between calls.

mod combinations;
mod config;
mod engine;
mod feasibility;
mod types;

pub use combinations::{binomial, pairs, Combinations};
pub use config::SearchConfig;
pub use engine::LineupSearch;
pub use feasibility::{fits, subset_cost, subset_score};
pub use types::RankedLineup;
