//! Lineup ranking and counting.
//!
//! # Algorithm
//!
//! 1. Resolve pinned names, sum their score and cost, and derive the
//!    remaining budget (`budget_cap - pinned_cost`).
//! 2. Drop pinned items from each pool and compute the open slots.
//! 3. Enumerate every (driver subset, team subset) pair of the open slots.
//! 4. Keep pairs whose added cost fits the remaining budget.
//!
//! Ranking scores the survivors, stable-sorts them by total score
//! (descending) and truncates. Counting skips step 3's cross product for
//! driver subsets that are already over budget and binary-searches the
//! sorted team costs for the rest.

use std::cmp::Ordering;

use tracing::debug;

use super::combinations::{binomial, pairs, Combinations};
use super::config::SearchConfig;
use super::feasibility::{fits, subset_cost, subset_score};
use super::types::RankedLineup;
use crate::catalog::{Catalog, Category, Item, Selection, Totals};
use crate::error::SearchError;

/// A resolved query: what is pinned and what is left to fill.
struct OpenSlots<'c> {
    pinned: Totals,
    budget: f64,
    drivers: Vec<&'c Item>,
    teams: Vec<&'c Item>,
    driver_picks: usize,
    team_picks: usize,
}

/// A feasible lineup before it is materialized.
struct Candidate<'c> {
    drivers: Vec<&'c Item>,
    teams: Vec<&'c Item>,
    total_score: f64,
    total_cost: f64,
}

impl Candidate<'_> {
    fn into_lineup(self) -> RankedLineup {
        RankedLineup {
            drivers: self.drivers.into_iter().cloned().collect(),
            teams: self.teams.into_iter().cloned().collect(),
            total_score: self.total_score,
            total_cost: self.total_cost,
        }
    }
}

/// Exhaustive search over completions of a partial selection.
///
/// Holds no mutable state: every query recomputes from the catalog, so
/// identical inputs give identical outputs.
///
/// # Examples
///
/// ```
/// use formulab::catalog::{Catalog, Category, Item, Selection};
/// use formulab::search::{LineupSearch, SearchConfig};
///
/// let catalog = Catalog::new(
///     vec![Item::new("A", 10.0, 30.0), Item::new("B", 20.0, 50.0), Item::new("C", 5.0, 10.0)],
///     vec![Item::new("X", 15.0, 40.0), Item::new("Y", 25.0, 60.0)],
/// )
/// .unwrap();
/// let config = SearchConfig::default().with_slots(2, 1).with_budget_cap(45.0);
/// let search = LineupSearch::new(&catalog, config).unwrap();
///
/// let mut selection = Selection::new();
/// assert!(selection.pin(Category::Driver, "A", search.config().driver_slots));
///
/// let best = search.rank(&selection).unwrap();
/// assert_eq!(best[0].driver_names(), vec!["B"]);
/// assert_eq!(best[0].team_names(), vec!["X"]);
/// assert_eq!(search.count(&selection).unwrap(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct LineupSearch<'c> {
    catalog: &'c Catalog,
    config: SearchConfig,
}

impl<'c> LineupSearch<'c> {
    /// Creates a search over `catalog`, validating the configuration.
    pub fn new(catalog: &'c Catalog, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        Ok(Self { catalog, config })
    }

    /// Roster shape and budget this search was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of complete lineups in the unselected space, budget ignored.
    pub fn space_size(&self) -> u64 {
        binomial(self.catalog.drivers().len(), self.config.driver_slots)
            .saturating_mul(binomial(self.catalog.teams().len(), self.config.team_slots))
    }

    fn open_slots(&self, selection: &Selection) -> Result<OpenSlots<'c>, SearchError> {
        for category in Category::ALL {
            let picked = selection.len(category);
            let slots = self.config.slots(category);
            if picked > slots {
                return Err(SearchError::TooManyPicks {
                    category,
                    picked,
                    slots,
                });
            }
        }

        let pinned = self.catalog.selection_totals(selection)?;
        let driver_picks = selection.picks(Category::Driver);
        let team_picks = selection.picks(Category::Team);

        Ok(OpenSlots {
            pinned,
            budget: self.config.budget_cap - pinned.cost,
            drivers: self.catalog.remaining(Category::Driver, driver_picks),
            teams: self.catalog.remaining(Category::Team, team_picks),
            driver_picks: self.config.driver_slots - driver_picks.len(),
            team_picks: self.config.team_slots - team_picks.len(),
        })
    }

    /// Every feasible completion, in enumeration order.
    fn candidates(&self, open: &OpenSlots<'c>) -> Vec<Candidate<'c>> {
        pairs(&open.drivers, open.driver_picks, &open.teams, open.team_picks)
            .filter_map(|(drivers, teams)| {
                let added_cost = subset_cost(&drivers) + subset_cost(&teams);
                if !fits(added_cost, open.budget) {
                    return None;
                }
                let total_score =
                    open.pinned.score + subset_score(&drivers) + subset_score(&teams);
                Some(Candidate {
                    drivers,
                    teams,
                    total_score,
                    total_cost: open.pinned.cost + added_cost,
                })
            })
            .collect()
    }

    /// Top `config.top_n` completions of `selection` by total score.
    pub fn rank(&self, selection: &Selection) -> Result<Vec<RankedLineup>, SearchError> {
        self.rank_top(selection, self.config.top_n)
    }

    /// Top `top_n` completions of `selection` by total score.
    ///
    /// Equal scores keep enumeration order, so a shorter ranking is always
    /// a prefix of a longer one. An empty result means nothing fits.
    pub fn rank_top(
        &self,
        selection: &Selection,
        top_n: usize,
    ) -> Result<Vec<RankedLineup>, SearchError> {
        let open = self.open_slots(selection)?;
        let mut candidates = self.candidates(&open);
        let feasible = candidates.len();

        // Stable: ties stay in enumeration order.
        candidates.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        });
        candidates.truncate(top_n);

        debug!(
            drivers_open = open.driver_picks,
            teams_open = open.team_picks,
            budget = open.budget,
            feasible,
            returned = candidates.len(),
            "ranked lineups"
        );

        Ok(candidates.into_iter().map(Candidate::into_lineup).collect())
    }

    /// Every feasible completion of `selection`, unsorted, in enumeration
    /// order.
    pub fn feasible(&self, selection: &Selection) -> Result<Vec<RankedLineup>, SearchError> {
        let open = self.open_slots(selection)?;
        Ok(self
            .candidates(&open)
            .into_iter()
            .map(Candidate::into_lineup)
            .collect())
    }

    /// Number of feasible completions of `selection`.
    ///
    /// Always equals `self.feasible(selection)?.len()`, without building
    /// the lineups.
    pub fn count(&self, selection: &Selection) -> Result<u64, SearchError> {
        let open = self.open_slots(selection)?;

        let mut team_costs: Vec<f64> = Combinations::new(&open.teams, open.team_picks)
            .map(|teams| subset_cost(&teams))
            .collect();
        team_costs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let mut total = 0u64;
        let mut pruned = 0u64;
        for drivers in Combinations::new(&open.drivers, open.driver_picks) {
            let driver_cost = subset_cost(&drivers);
            if !fits(driver_cost, open.budget) {
                pruned += 1;
                continue;
            }
            // `driver_cost + c` is monotone in `c`, so the feasible team
            // costs form a prefix of the sorted list.
            let n = team_costs.partition_point(|&c| fits(driver_cost + c, open.budget));
            total += n as u64;
        }

        debug!(
            drivers_open = open.driver_picks,
            teams_open = open.team_picks,
            budget = open.budget,
            pruned,
            feasible = total,
            "counted lineups"
        );
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Seven drivers at 10 each and three teams at 20 each.
    fn ladder() -> Catalog {
        let drivers = [100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0]
            .iter()
            .enumerate()
            .map(|(i, &s)| Item::new(format!("D{i}"), 10.0, s))
            .collect();
        let teams = [200.0, 150.0, 100.0]
            .iter()
            .enumerate()
            .map(|(i, &s)| Item::new(format!("T{i}"), 20.0, s))
            .collect();
        Catalog::new(drivers, teams).unwrap()
    }

    fn search(catalog: &Catalog) -> LineupSearch<'_> {
        LineupSearch::new(catalog, SearchConfig::default()).unwrap()
    }

    #[test]
    fn test_best_lineup_unpinned() {
        let catalog = ladder();
        let best = search(&catalog).rank(&Selection::new()).unwrap();

        assert_eq!(best.len(), 5);
        assert_eq!(best[0].driver_names(), vec!["D0", "D1", "D2", "D3", "D4"]);
        assert_eq!(best[0].team_names(), vec!["T0", "T1"]);
        assert!((best[0].total_score - 750.0).abs() < 1e-10);
        assert!((best[0].total_cost - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_ranking_sorted_and_within_budget() {
        let catalog = ladder();
        let ranked = search(&catalog).rank_top(&Selection::new(), 1000).unwrap();

        // C(7,5) * C(3,2) = 21 * 3, all at cost 90
        assert_eq!(ranked.len(), 63);
        for pair in ranked.windows(2) {
            assert!(pair[0].total_score >= pair[1].total_score);
        }
        assert!(ranked.iter().all(|l| l.total_cost <= 100.0));
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        let catalog = Catalog::new(
            vec![Item::new("A", 1.0, 5.0), Item::new("B", 1.0, 5.0), Item::new("C", 1.0, 5.0)],
            vec![Item::new("X", 1.0, 0.0)],
        )
        .unwrap();
        let config = SearchConfig::default().with_slots(1, 1);
        let ranked = LineupSearch::new(&catalog, config)
            .unwrap()
            .rank(&Selection::new())
            .unwrap();
        let order: Vec<&str> = ranked.iter().map(|l| l.drivers[0].name.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_pinned_totals_included() {
        let catalog = ladder();
        let selection = Selection::from_picks(["D6"], ["T2"]);
        let best = search(&catalog).rank(&selection).unwrap();

        // D6 (40) + T2 (100) pinned; best fill is D0..D3 + T0.
        assert_eq!(best[0].driver_names(), vec!["D0", "D1", "D2", "D3"]);
        assert_eq!(best[0].team_names(), vec!["T0"]);
        assert!((best[0].total_score - (40.0 + 100.0 + 340.0 + 200.0)).abs() < 1e-10);
        assert!((best[0].total_cost - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_exact_budget_included() {
        let catalog = ladder();
        let config = SearchConfig::default().with_budget_cap(90.0);
        let search = LineupSearch::new(&catalog, config).unwrap();
        assert_eq!(search.count(&Selection::new()).unwrap(), 63);
        assert_eq!(search.rank(&Selection::new()).unwrap().len(), 5);

        let tight = LineupSearch::new(&catalog, SearchConfig::default().with_budget_cap(89.99)).unwrap();
        assert_eq!(tight.count(&Selection::new()).unwrap(), 0);
        assert!(tight.rank(&Selection::new()).unwrap().is_empty());
    }

    #[test]
    fn test_pool_smaller_than_open_slots() {
        // Five driver slots, four drivers.
        let catalog = Catalog::new(
            (0..4).map(|i| Item::new(format!("D{i}"), 1.0, 1.0)).collect(),
            vec![Item::new("X", 1.0, 1.0), Item::new("Y", 1.0, 1.0)],
        )
        .unwrap();
        let search = search(&catalog);
        assert!(search.rank(&Selection::new()).unwrap().is_empty());
        assert_eq!(search.count(&Selection::new()).unwrap(), 0);
    }

    #[test]
    fn test_full_selection_has_single_completion() {
        let catalog = ladder();
        let selection = Selection::from_picks(["D0", "D1", "D2", "D3", "D4"], ["T0", "T1"]);
        let search = search(&catalog);
        let ranked = search.rank(&selection).unwrap();
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].drivers.is_empty());
        assert!(ranked[0].teams.is_empty());
        assert!((ranked[0].total_score - 750.0).abs() < 1e-10);
        assert_eq!(search.count(&selection).unwrap(), 1);
    }

    #[test]
    fn test_over_budget_pins_yield_nothing() {
        let catalog = ladder();
        let config = SearchConfig::default().with_budget_cap(30.0);
        let search = LineupSearch::new(&catalog, config).unwrap();
        let selection = Selection::from_picks(["D0", "D1", "D2", "D3"], Vec::<String>::new());
        assert!(search.rank(&selection).unwrap().is_empty());
        assert_eq!(search.count(&selection).unwrap(), 0);
    }

    #[test]
    fn test_unknown_pin_is_error() {
        let catalog = ladder();
        let selection = Selection::from_picks(["Nobody"], Vec::<String>::new());
        let err = search(&catalog).rank(&selection).unwrap_err();
        assert!(matches!(err, SearchError::UnknownItem { category: Category::Driver, .. }));
        assert!(search(&catalog).count(&selection).is_err());
    }

    #[test]
    fn test_too_many_pins_is_error() {
        let catalog = ladder();
        let selection = Selection::from_picks(Vec::<String>::new(), ["T0", "T1", "T2"]);
        let err = search(&catalog).count(&selection).unwrap_err();
        assert_eq!(
            err,
            SearchError::TooManyPicks {
                category: Category::Team,
                picked: 3,
                slots: 2
            }
        );
    }

    #[test]
    fn test_pins_bounded_by_config_slots() {
        let catalog = ladder();
        let search = search(&catalog);
        let slots = search.config().team_slots;

        let mut selection = Selection::new();
        for name in ["T0", "T1", "T2"] {
            selection.pin(Category::Team, name, slots);
        }
        assert_eq!(selection.picks(Category::Team), ["T0", "T1"]);
        // Both team slots pinned: only the driver fill varies.
        assert_eq!(search.count(&selection).unwrap(), 21);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let catalog = ladder();
        let err = LineupSearch::new(&catalog, SearchConfig::default().with_top_n(0)).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn test_count_matches_feasible_with_mixed_costs() {
        let catalog = Catalog::new(
            vec![
                Item::new("A", 12.5, 10.0),
                Item::new("B", 30.1, 40.0),
                Item::new("C", 7.3, 5.0),
                Item::new("D", 22.0, 25.0),
                Item::new("E", 18.4, 18.0),
                Item::new("F", 9.9, 9.0),
            ],
            vec![
                Item::new("X", 25.0, 90.0),
                Item::new("Y", 11.2, 30.0),
                Item::new("Z", 17.7, 45.0),
            ],
        )
        .unwrap();
        let config = SearchConfig::default().with_slots(3, 2).with_budget_cap(80.0);
        let search = LineupSearch::new(&catalog, config).unwrap();

        for selection in [
            Selection::new(),
            Selection::from_picks(["B"], Vec::<String>::new()),
            Selection::from_picks(["C", "F"], ["Y"]),
        ] {
            let feasible = search.feasible(&selection).unwrap();
            assert_eq!(search.count(&selection).unwrap(), feasible.len() as u64);
            assert!(feasible.iter().all(|l| l.total_cost <= 80.0 + 1e-9));
        }
    }

    #[test]
    fn test_prefix_stability() {
        let catalog = ladder();
        let search = search(&catalog);
        let short = search.rank_top(&Selection::new(), 3).unwrap();
        let long = search.rank_top(&Selection::new(), 20).unwrap();
        assert_eq!(short[..], long[..3]);
    }

    #[test]
    fn test_idempotent() {
        let catalog = ladder();
        let search = search(&catalog);
        let selection = Selection::from_picks(["D3"], Vec::<String>::new());
        assert_eq!(search.rank(&selection).unwrap(), search.rank(&selection).unwrap());
        assert_eq!(search.count(&selection).unwrap(), search.count(&selection).unwrap());
    }

    #[test]
    fn test_space_size() {
        let catalog = ladder();
        assert_eq!(search(&catalog).space_size(), 21 * 3);
    }
}
