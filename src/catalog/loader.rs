//! CSV loading and name normalization.
//!
//! Expects one file per category with a header row. Identity may be in a
//! `name`, `driver` or `team` column; score in `score`, `points` or
//! `points_2024`. Other columns are ignored.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::table::Catalog;
use super::types::{Category, Item};
use crate::error::CatalogError;

#[derive(Debug, serde::Deserialize)]
struct Row {
    #[serde(alias = "driver", alias = "team")]
    name: String,
    cost: f64,
    #[serde(alias = "points", alias = "points_2024")]
    score: f64,
}

/// Turns a raw identifier like `max_verstappen` into `Max Verstappen`.
///
/// Underscores become spaces; the first letter of each alphabetic run is
/// upper-cased and the rest lower-cased.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.trim().chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Reads one category's rows from any CSV source, preserving row order.
pub fn read_items<R: Read>(reader: R, category: Category) -> Result<Vec<Item>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for row in csv_reader.deserialize::<Row>() {
        let row = row?;
        items.push(Item::new(normalize_name(&row.name), row.cost, row.score));
    }
    debug!(category = %category, rows = items.len(), "read catalog rows");
    Ok(items)
}

/// Loads and validates a catalog from a driver file and a team file.
pub fn load_catalog(
    drivers: impl AsRef<Path>,
    teams: impl AsRef<Path>,
) -> Result<Catalog, CatalogError> {
    let drivers = read_items(std::fs::File::open(drivers)?, Category::Driver)?;
    let teams = read_items(std::fs::File::open(teams)?, Category::Team)?;
    Catalog::new(drivers, teams)
}
