//! In-memory item tables.

use std::collections::HashSet;

use super::selection::Selection;
use super::types::{Category, Item};
use crate::error::{CatalogError, SearchError};

/// Read-only driver and team tables.
///
/// Items keep the order they were supplied in. That order drives subset
/// enumeration, so it also decides how equal-score lineups are ordered.
///
/// # Examples
///
/// ```
/// use formulab::catalog::{Catalog, Category, Item};
///
/// let catalog = Catalog::new(
///     vec![Item::new("Norris", 30.0, 344.0), Item::new("Piastri", 25.0, 292.0)],
///     vec![Item::new("Mclaren", 30.0, 666.0)],
/// )
/// .unwrap();
/// assert_eq!(catalog.items(Category::Driver).len(), 2);
/// assert!(catalog.find(Category::Team, "Mclaren").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    drivers: Vec<Item>,
    teams: Vec<Item>,
}

/// Pinned score and cost of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub score: f64,
    pub cost: f64,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate names and negative or
    /// non-finite costs and scores.
    pub fn new(drivers: Vec<Item>, teams: Vec<Item>) -> Result<Self, CatalogError> {
        check_pool(Category::Driver, &drivers)?;
        check_pool(Category::Team, &teams)?;
        Ok(Self { drivers, teams })
    }

    /// Items of one category in load order.
    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Driver => &self.drivers,
            Category::Team => &self.teams,
        }
    }

    pub fn drivers(&self) -> &[Item] {
        &self.drivers
    }

    pub fn teams(&self) -> &[Item] {
        &self.teams
    }

    /// Looks up an item by exact name.
    pub fn find(&self, category: Category, name: &str) -> Option<&Item> {
        self.items(category).iter().find(|item| item.name == name)
    }

    /// Resolves pinned names to catalog items.
    ///
    /// Every name must exist and appear once. The returned items are in
    /// catalog order, not pin order.
    pub fn resolve(&self, category: Category, names: &[String]) -> Result<Vec<&Item>, SearchError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
        for name in names {
            if self.find(category, name).is_none() {
                return Err(SearchError::UnknownItem {
                    category,
                    name: name.clone(),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(SearchError::DuplicatePick {
                    category,
                    name: name.clone(),
                });
            }
        }

        Ok(self
            .items(category)
            .iter()
            .filter(|item| seen.contains(item.name.as_str()))
            .collect())
    }

    /// Items of a category that are not pinned, in catalog order.
    pub fn remaining<'a>(&'a self, category: Category, pinned: &[String]) -> Vec<&'a Item> {
        self.items(category)
            .iter()
            .filter(|item| !pinned.iter().any(|p| *p == item.name))
            .collect()
    }

    /// Sums score and cost of everything pinned in `selection`.
    pub fn selection_totals(&self, selection: &Selection) -> Result<Totals, SearchError> {
        let mut totals = Totals::default();
        for category in Category::ALL {
            for item in self.resolve(category, selection.picks(category))? {
                totals.score += item.score;
                totals.cost += item.cost;
            }
        }
        Ok(totals)
    }
}

fn check_pool(category: Category, items: &[Item]) -> Result<(), CatalogError> {
    let mut names: HashSet<&str> = HashSet::with_capacity(items.len());
    for item in items {
        if !names.insert(item.name.as_str()) {
            return Err(CatalogError::DuplicateItem {
                category,
                name: item.name.clone(),
            });
        }
        for (field, value) in [("cost", item.cost), ("score", item.score)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidValue {
                    category,
                    name: item.name.clone(),
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                Item::new("A", 10.0, 100.0),
                Item::new("B", 12.0, 90.0),
                Item::new("C", 8.0, 40.0),
            ],
            vec![Item::new("X", 20.0, 200.0), Item::new("Y", 15.0, 120.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Catalog::new(
            vec![Item::new("A", 1.0, 1.0), Item::new("A", 2.0, 2.0)],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem { category: Category::Driver, .. }));
    }

    #[test]
    fn test_same_name_across_categories_allowed() {
        let catalog = Catalog::new(vec![Item::new("Haas", 5.0, 1.0)], vec![Item::new("Haas", 6.0, 2.0)]);
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let negative = Catalog::new(vec![Item::new("A", -1.0, 1.0)], vec![]);
        assert!(matches!(
            negative,
            Err(CatalogError::InvalidValue { field: "cost", .. })
        ));

        let nan = Catalog::new(vec![], vec![Item::new("X", 1.0, f64::NAN)]);
        assert!(matches!(
            nan,
            Err(CatalogError::InvalidValue { field: "score", category: Category::Team, .. })
        ));
    }

    #[test]
    fn test_resolve_catalog_order() {
        let catalog = sample();
        let picks = vec!["C".to_string(), "A".to_string()];
        let items = catalog.resolve(Category::Driver, &picks).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = sample();
        let err = catalog
            .resolve(Category::Team, &["Z".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::UnknownItem {
                category: Category::Team,
                name: "Z".into()
            }
        );
    }

    #[test]
    fn test_resolve_duplicate() {
        let catalog = sample();
        let err = catalog
            .resolve(Category::Driver, &["A".to_string(), "A".to_string()])
            .unwrap_err();
        assert!(matches!(err, SearchError::DuplicatePick { .. }));
    }

    #[test]
    fn test_remaining_excludes_pinned() {
        let catalog = sample();
        let rest = catalog.remaining(Category::Driver, &["B".to_string()]);
        let names: Vec<&str> = rest.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_selection_totals() {
        let catalog = sample();
        let mut selection = Selection::new();
        selection.pin(Category::Driver, "A", 5);
        selection.pin(Category::Team, "Y", 2);
        let totals = catalog.selection_totals(&selection).unwrap();
        assert!((totals.score - 220.0).abs() < 1e-10);
        assert!((totals.cost - 25.0).abs() < 1e-10);
    }
}
