//! User-pinned partial lineup.

use super::types::Category;

/// Names pinned by the user, per category, in pin order.
///
/// A selection is plain data owned by the caller. `pin` respects a slot
/// count, but names are not checked against a catalog until the selection
/// is handed to a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    drivers: Vec<String>,
    teams: Vec<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from two name lists.
    pub fn from_picks<D, T>(drivers: D, teams: T) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            drivers: drivers.into_iter().map(Into::into).collect(),
            teams: teams.into_iter().map(Into::into).collect(),
        }
    }

    fn picks_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Driver => &mut self.drivers,
            Category::Team => &mut self.teams,
        }
    }

    /// Names pinned in a category.
    pub fn picks(&self, category: Category) -> &[String] {
        match category {
            Category::Driver => &self.drivers,
            Category::Team => &self.teams,
        }
    }

    /// Pins a name into a category with `slots` places.
    ///
    /// Returns `false`, leaving the selection unchanged, if the name is
    /// already pinned or the category is full.
    pub fn pin(&mut self, category: Category, name: impl Into<String>, slots: usize) -> bool {
        if self.is_full(category, slots) {
            return false;
        }
        let name = name.into();
        let picks = self.picks_mut(category);
        if picks.contains(&name) {
            return false;
        }
        picks.push(name);
        true
    }

    /// Removes a pinned name. Returns `false` if it was not pinned.
    pub fn unpin(&mut self, category: Category, name: &str) -> bool {
        let picks = self.picks_mut(category);
        match picks.iter().position(|p| p == name) {
            Some(idx) => {
                picks.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.picks(category).iter().any(|p| p == name)
    }

    /// Number of names pinned in a category.
    pub fn len(&self, category: Category) -> usize {
        self.picks(category).len()
    }

    /// Whether nothing is pinned in either category.
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty() && self.teams.is_empty()
    }

    /// Whether a category has no free slots left.
    pub fn is_full(&self, category: Category, slots: usize) -> bool {
        self.len(category) >= slots
    }

    pub fn clear(&mut self) {
        self.drivers.clear();
        self.teams.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_and_unpin() {
        let mut sel = Selection::new();
        assert!(sel.is_empty());
        assert!(sel.pin(Category::Driver, "Sainz", 5));
        assert!(sel.pin(Category::Driver, "Alonso", 5));
        assert!(!sel.pin(Category::Driver, "Sainz", 5));
        assert_eq!(sel.picks(Category::Driver), ["Sainz", "Alonso"]);

        assert!(sel.unpin(Category::Driver, "Sainz"));
        assert!(!sel.unpin(Category::Driver, "Sainz"));
        assert_eq!(sel.len(Category::Driver), 1);
        assert!(!sel.contains(Category::Team, "Alonso"));
    }

    #[test]
    fn test_pin_refuses_beyond_slots() {
        let mut sel = Selection::new();
        assert!(sel.pin(Category::Team, "Mclaren", 2));
        assert!(sel.pin(Category::Team, "Ferrari", 2));
        assert!(!sel.pin(Category::Team, "Mercedes", 2));
        assert_eq!(sel.picks(Category::Team), ["Mclaren", "Ferrari"]);

        // Freeing a slot makes room again.
        assert!(sel.unpin(Category::Team, "Ferrari"));
        assert!(sel.pin(Category::Team, "Mercedes", 2));
        assert_eq!(sel.len(Category::Team), 2);
    }

    #[test]
    fn test_is_full() {
        let sel = Selection::from_picks(Vec::<String>::new(), ["Ferrari", "Mclaren"]);
        assert!(sel.is_full(Category::Team, 2));
        assert!(!sel.is_full(Category::Driver, 5));
    }

    #[test]
    fn test_clear() {
        let mut sel = Selection::from_picks(["Ocon"], ["Haas"]);
        sel.clear();
        assert!(sel.is_empty());
    }
}
