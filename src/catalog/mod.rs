//! Item catalog and user selections.
//!
//! The catalog is two read-only tables (drivers and teams) of priced,
//! scored items. It is built once per session and shared by reference with
//! every query. A [`Selection`] is the caller-owned set of pinned names.
//!
//! With the `loader` feature, [`load_catalog`] reads both tables from CSV
//! files and normalizes raw identifiers into display names.

#[cfg(feature = "loader")]
mod loader;
mod selection;
mod table;
mod types;

#[cfg(feature = "loader")]
pub use loader::{load_catalog, normalize_name, read_items};
pub use selection::Selection;
pub use table::{Catalog, Totals};
pub use types::{Category, Item};
