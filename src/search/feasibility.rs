//! Budget feasibility and subset aggregation.
//!
//! Ranking and counting both decide feasibility through [`fits`] on the
//! cost `subset_cost(drivers) + subset_cost(teams)`, so the two views can
//! never disagree.

use crate::catalog::Item;

/// Whether `cost` stays within `budget`. The boundary is inclusive.
#[inline]
pub fn fits(cost: f64, budget: f64) -> bool {
    cost <= budget
}

/// Sum of item costs, left to right.
#[inline]
pub fn subset_cost(items: &[&Item]) -> f64 {
    items.iter().map(|item| item.cost).sum()
}

/// Sum of item scores, left to right.
#[inline]
pub fn subset_score(items: &[&Item]) -> f64 {
    items.iter().map(|item| item.score).sum()
}
