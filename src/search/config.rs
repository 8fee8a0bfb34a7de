//! Search configuration.
//!
//! [`SearchConfig`] carries the roster shape and budget so that the engine
//! can be exercised against synthetic catalogs.

use crate::catalog::Category;

/// Roster shape, budget and result size for lineup queries.
///
/// # Defaults
///
/// ```
/// use formulab::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.driver_slots, 5);
/// assert_eq!(config.team_slots, 2);
/// assert_eq!(config.top_n, 5);
/// assert!((config.budget_cap - 100.0).abs() < 1e-10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use formulab::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_budget_cap(90.0)
///     .with_top_n(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum total cost of a complete lineup, shared by both categories.
    pub budget_cap: f64,

    /// Drivers required in a complete lineup.
    pub driver_slots: usize,

    /// Teams required in a complete lineup.
    pub team_slots: usize,

    /// Number of lineups returned by a ranking query.
    pub top_n: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            budget_cap: 100.0,
            driver_slots: 5,
            team_slots: 2,
            top_n: 5,
        }
    }
}

impl SearchConfig {
    /// Sets the budget cap.
    pub fn with_budget_cap(mut self, cap: f64) -> Self {
        self.budget_cap = cap;
        self
    }

    /// Sets both slot counts.
    pub fn with_slots(mut self, drivers: usize, teams: usize) -> Self {
        self.driver_slots = drivers;
        self.team_slots = teams;
        self
    }

    /// Sets the number of lineups a ranking returns.
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Slot count of one category.
    pub fn slots(&self, category: Category) -> usize {
        match category {
            Category::Driver => self.driver_slots,
            Category::Team => self.team_slots,
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// A negative budget is valid; it just admits no lineups.
    pub fn validate(&self) -> Result<(), String> {
        if !self.budget_cap.is_finite() {
            return Err("budget_cap must be finite".into());
        }
        if self.driver_slots + self.team_slots == 0 {
            return Err("at least one slot is required".into());
        }
        if self.top_n == 0 {
            return Err("top_n must be at least 1".into());
        }
        Ok(())
    }
}
