//! Brute-force survey of the unselected lineup space.
//!
//! Produces the constants a [`RankModel`](super::RankModel) needs: the
//! number of feasible lineups and the best and worst feasible scores. The
//! survey is meant to run offline whenever the catalog changes.

use tracing::info;

use super::config::SurveyConfig;
use crate::catalog::{Catalog, Item};
use crate::error::SearchError;
use crate::search::{
    binomial, fits, subset_cost, subset_score, Combinations, RankedLineup, SearchConfig,
};

/// Summary of every complete lineup in the unselected space.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyReport {
    /// Complete lineups examined, feasible or not.
    pub examined: u64,
    /// Lineups within the budget cap.
    pub feasible: u64,
    /// First feasible lineup (in enumeration order) with the highest score.
    pub best: Option<RankedLineup>,
    /// First feasible lineup (in enumeration order) with the lowest score.
    pub worst: Option<RankedLineup>,
}

struct Scored<'c> {
    drivers: Vec<&'c Item>,
    teams: Vec<&'c Item>,
    score: f64,
    cost: f64,
}

impl Scored<'_> {
    fn into_lineup(self) -> RankedLineup {
        RankedLineup {
            drivers: self.drivers.into_iter().cloned().collect(),
            teams: self.teams.into_iter().cloned().collect(),
            total_score: self.score,
            total_cost: self.cost,
        }
    }
}

/// Partial survey over a contiguous run of driver subsets.
#[derive(Default)]
struct Tally<'c> {
    examined: u64,
    feasible: u64,
    best: Option<Scored<'c>>,
    worst: Option<Scored<'c>>,
}

impl<'c> Tally<'c> {
    fn observe(&mut self, drivers: &[&'c Item], teams: &[&'c Item], budget: f64) {
        self.examined += 1;
        let cost = subset_cost(drivers) + subset_cost(teams);
        if !fits(cost, budget) {
            return;
        }
        self.feasible += 1;

        let score = subset_score(drivers) + subset_score(teams);
        if self.best.as_ref().map_or(true, |b| score > b.score) {
            self.best = Some(Scored {
                drivers: drivers.to_vec(),
                teams: teams.to_vec(),
                score,
                cost,
            });
        }
        if self.worst.as_ref().map_or(true, |w| score < w.score) {
            self.worst = Some(Scored {
                drivers: drivers.to_vec(),
                teams: teams.to_vec(),
                score,
                cost,
            });
        }
    }

    /// Combines two tallies where `self` precedes `later` in enumeration
    /// order. Ties go to `self`.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn merge(self, later: Tally<'c>) -> Tally<'c> {
        let best = match (self.best, later.best) {
            (Some(a), Some(b)) => Some(if b.score > a.score { b } else { a }),
            (a, b) => a.or(b),
        };
        let worst = match (self.worst, later.worst) {
            (Some(a), Some(b)) => Some(if b.score < a.score { b } else { a }),
            (a, b) => a.or(b),
        };
        Tally {
            examined: self.examined + later.examined,
            feasible: self.feasible + later.feasible,
            best,
            worst,
        }
    }

    fn into_report(self) -> SurveyReport {
        SurveyReport {
            examined: self.examined,
            feasible: self.feasible,
            best: self.best.map(Scored::into_lineup),
            worst: self.worst.map(Scored::into_lineup),
        }
    }
}

/// Whether moving the examined count from `before` to `after` passes a
/// multiple of `interval`. An interval of 0 never reports.
fn crosses_interval(before: u64, after: u64, interval: u64) -> bool {
    interval > 0 && before / interval != after / interval
}

/// Offline survey runner.
pub struct Survey;

impl Survey {
    /// Enumerates every complete lineup of `catalog` with nothing pinned.
    ///
    /// Only the budget cap and slot counts of `search` are used.
    pub fn run(
        catalog: &Catalog,
        search: &SearchConfig,
        config: &SurveyConfig,
    ) -> Result<SurveyReport, SearchError> {
        search.validate().map_err(SearchError::InvalidConfig)?;

        let drivers: Vec<&Item> = catalog.drivers().iter().collect();
        let teams: Vec<&Item> = catalog.teams().iter().collect();
        let team_subsets: Vec<Vec<&Item>> =
            Combinations::new(&teams, search.team_slots).collect();

        let tally = if config.parallel {
            Self::run_parallel(&drivers, &team_subsets, search, config)
        } else {
            Self::run_sequential(&drivers, &team_subsets, search, config)
        };

        info!(
            examined = tally.examined,
            feasible = tally.feasible,
            best = tally.best.as_ref().map(|b| b.score),
            worst = tally.worst.as_ref().map(|w| w.score),
            "survey complete"
        );
        Ok(tally.into_report())
    }

    fn run_sequential<'c>(
        drivers: &[&'c Item],
        team_subsets: &[Vec<&'c Item>],
        search: &SearchConfig,
        config: &SurveyConfig,
    ) -> Tally<'c> {
        let total = binomial(drivers.len(), search.driver_slots)
            .saturating_mul(team_subsets.len() as u64);
        let mut tally = Tally::default();
        for driver_subset in Combinations::new(drivers, search.driver_slots) {
            for team_subset in team_subsets {
                tally.observe(&driver_subset, team_subset, search.budget_cap);
                if crosses_interval(tally.examined - 1, tally.examined, config.progress_interval) {
                    info!(processed = tally.examined, total, "survey progress");
                }
            }
        }
        tally
    }

    #[cfg(feature = "parallel")]
    fn run_parallel<'c>(
        drivers: &[&'c Item],
        team_subsets: &[Vec<&'c Item>],
        search: &SearchConfig,
        config: &SurveyConfig,
    ) -> Tally<'c> {
        use rayon::prelude::*;
        use std::sync::atomic::{AtomicU64, Ordering};

        let driver_subsets: Vec<Vec<&'c Item>> =
            Combinations::new(drivers, search.driver_slots).collect();
        let total = (driver_subsets.len() as u64).saturating_mul(team_subsets.len() as u64);
        let processed = AtomicU64::new(0);

        // `reduce` keeps the relative order of adjacent pieces, so `merge`
        // still resolves ties toward the earlier lineup.
        driver_subsets
            .par_iter()
            .map(|driver_subset| {
                let mut tally = Tally::default();
                for team_subset in team_subsets {
                    tally.observe(driver_subset, team_subset, search.budget_cap);
                }
                // Workers report at driver-subset granularity, so each
                // crossed multiple is logged once with the count reached.
                let before = processed.fetch_add(tally.examined, Ordering::Relaxed);
                let after = before + tally.examined;
                if crosses_interval(before, after, config.progress_interval) {
                    info!(processed = after, total, "survey progress");
                }
                tally
            })
            .reduce(Tally::default, Tally::merge)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel<'c>(
        drivers: &[&'c Item],
        team_subsets: &[Vec<&'c Item>],
        search: &SearchConfig,
        config: &SurveyConfig,
    ) -> Tally<'c> {
        Self::run_sequential(drivers, team_subsets, search, config)
    }
}
