//! Search result types.

use crate::catalog::Item;

/// A complete lineup produced by a ranking query.
///
/// `drivers` and `teams` hold only the items added on top of the pinned
/// selection, in catalog order. The totals include the pinned items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedLineup {
    /// Drivers added to the selection.
    pub drivers: Vec<Item>,
    /// Teams added to the selection.
    pub teams: Vec<Item>,
    /// Pinned score plus the score of every added item.
    pub total_score: f64,
    /// Pinned cost plus the cost of every added item.
    pub total_cost: f64,
}

impl RankedLineup {
    /// Points per unit of cost for the whole lineup.
    pub fn value_ratio(&self) -> f64 {
        if self.total_cost > 0.0 {
            self.total_score / self.total_cost
        } else {
            0.0
        }
    }

    /// Share of the lineup's score contributed by `item`, in percent.
    pub fn contribution(&self, item: &Item) -> f64 {
        if self.total_score > 0.0 {
            item.score / self.total_score * 100.0
        } else {
            0.0
        }
    }

    /// Names of the added drivers.
    pub fn driver_names(&self) -> Vec<&str> {
        self.drivers.iter().map(|d| d.name.as_str()).collect()
    }

    /// Names of the added teams.
    pub fn team_names(&self) -> Vec<&str> {
        self.teams.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios() {
        let lineup = RankedLineup {
            drivers: vec![Item::new("A", 10.0, 50.0)],
            teams: vec![Item::new("X", 30.0, 150.0)],
            total_score: 200.0,
            total_cost: 40.0,
        };
        assert!((lineup.value_ratio() - 5.0).abs() < 1e-10);
        assert!((lineup.contribution(&lineup.teams[0]) - 75.0).abs() < 1e-10);
        assert_eq!(lineup.driver_names(), vec!["A"]);
        assert_eq!(lineup.team_names(), vec!["X"]);
    }

    #[test]
    fn test_zero_totals() {
        let lineup = RankedLineup {
            drivers: vec![],
            teams: vec![],
            total_score: 0.0,
            total_cost: 0.0,
        };
        assert_eq!(lineup.value_ratio(), 0.0);
        assert_eq!(lineup.contribution(&Item::new("A", 1.0, 1.0)), 0.0);
    }
}
