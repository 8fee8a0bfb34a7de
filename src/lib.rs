//! Budget-capped fantasy lineup search.
//!
//! A lineup is 5 drivers and 2 teams whose combined cost stays within a
//! shared budget cap. Users pin some picks; the engine searches every
//! completion of the rest.
//!
//! - **Catalog**: Read-only driver and team tables, the user's pinned
//!   [`Selection`](catalog::Selection), and a CSV loader.
//! - **Search**: Lazy subset enumeration, the inclusive budget filter, a
//!   stable top-N ranker and a pruned counter that always agrees with it.
//! - **Estimate**: Linear score-to-rank model and the offline survey that
//!   calibrates it.
//!
//! # Architecture
//!
//! Every query is a pure function of the catalog, a [`SearchConfig`]
//! and a selection. Roster shape, budget and rank-model constants are
//! parameters with the reference values as defaults, so the engine runs
//! unchanged against synthetic catalogs.
//!
//! [`SearchConfig`]: search::SearchConfig

pub mod catalog;
pub mod error;
pub mod estimate;
pub mod search;
