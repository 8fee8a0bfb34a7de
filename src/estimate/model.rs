//! Linear score-to-rank model.

use super::survey::SurveyReport;
use crate::error::RankModelError;

/// Maps a lineup score to an approximate 1-based rank among all feasible
/// lineups of the unselected space.
///
/// The rank is interpolated linearly between the best score (rank 1) and
/// the worst score:
///
/// `rank = floor((max_score - score) / (max_score - min_score) * total_count) + 1`
///
/// Scores outside `[min_score, max_score]` extrapolate, so ranks below 1
/// or above `total_count` are possible.
///
/// # Examples
///
/// ```
/// use formulab::estimate::RankModel;
///
/// let model = RankModel::default();
/// assert_eq!(model.estimate(1749.0), 1);
/// assert_eq!(model.estimate(25.0), 297_308);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankModel {
    /// Lowest score of any feasible lineup.
    pub min_score: f64,
    /// Highest score of any feasible lineup.
    pub max_score: f64,
    /// Number of feasible lineups.
    pub total_count: u64,
}

impl Default for RankModel {
    /// Constants surveyed from the 2024-season catalog at a 100.0 cap.
    fn default() -> Self {
        Self {
            min_score: 25.0,
            max_score: 1749.0,
            total_count: 297_307,
        }
    }
}

impl RankModel {
    /// Creates a model, requiring finite bounds with `max_score > min_score`.
    pub fn new(min_score: f64, max_score: f64, total_count: u64) -> Result<Self, RankModelError> {
        if !min_score.is_finite() || !max_score.is_finite() {
            return Err(RankModelError::NonFinite);
        }
        if max_score <= min_score {
            return Err(RankModelError::EmptyRange {
                min: min_score,
                max: max_score,
            });
        }
        Ok(Self {
            min_score,
            max_score,
            total_count,
        })
    }

    /// Builds a model from a completed survey.
    pub fn from_report(report: &SurveyReport) -> Result<Self, RankModelError> {
        match (&report.best, &report.worst) {
            (Some(best), Some(worst)) => {
                Self::new(worst.total_score, best.total_score, report.feasible)
            }
            _ => Err(RankModelError::NoFeasibleLineups),
        }
    }

    /// Estimated rank of `score`.
    pub fn estimate(&self, score: f64) -> i64 {
        let span = self.max_score - self.min_score;
        let offset = (self.max_score - score) / span * self.total_count as f64;
        offset.floor() as i64 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::search::RankedLineup;

    fn lineup(score: f64) -> RankedLineup {
        RankedLineup {
            drivers: vec![Item::new("A", 1.0, score)],
            teams: vec![],
            total_score: score,
            total_cost: 1.0,
        }
    }

    #[test]
    fn test_reference_endpoints() {
        let model = RankModel::default();
        assert_eq!(model.estimate(1749.0), 1);
        assert_eq!(model.estimate(25.0), 297_308);
    }

    #[test]
    fn test_midpoint() {
        // 862 / 1724 = 0.5 exactly; 0.5 * 297307 = 148653.5
        let model = RankModel::default();
        assert_eq!(model.estimate(887.0), 148_654);
    }

    #[test]
    fn test_monotone() {
        let model = RankModel::default();
        assert!(model.estimate(1500.0) < model.estimate(1000.0));
        assert!(model.estimate(1000.0) < model.estimate(100.0));
    }

    #[test]
    fn test_out_of_range_extrapolates() {
        let model = RankModel::default();
        assert!(model.estimate(1800.0) < 1);
        assert!(model.estimate(0.0) > 297_307);
    }

    #[test]
    fn test_new_validation() {
        assert!(RankModel::new(10.0, 20.0, 5).is_ok());
        assert_eq!(
            RankModel::new(20.0, 20.0, 5),
            Err(RankModelError::EmptyRange { min: 20.0, max: 20.0 })
        );
        assert_eq!(
            RankModel::new(f64::NAN, 20.0, 5),
            Err(RankModelError::NonFinite)
        );
    }

    #[test]
    fn test_from_report() {
        let report = SurveyReport {
            examined: 10,
            feasible: 4,
            best: Some(lineup(90.0)),
            worst: Some(lineup(10.0)),
        };
        let model = RankModel::from_report(&report).unwrap();
        assert_eq!(model, RankModel::new(10.0, 90.0, 4).unwrap());

        let empty = SurveyReport {
            examined: 10,
            feasible: 0,
            best: None,
            worst: None,
        };
        assert_eq!(
            RankModel::from_report(&empty),
            Err(RankModelError::NoFeasibleLineups)
        );
    }
}
