//! Approximate rank of a lineup score within the full lineup space.
//!
//! Exact ranking would mean enumerating and sorting every feasible lineup
//! on each query. Instead a [`RankModel`] interpolates linearly between the
//! best and worst feasible scores, using constants produced offline by a
//! [`Survey`] of the unselected space.

mod config;
mod model;
mod survey;

pub use config::SurveyConfig;
pub use model::RankModel;
pub use survey::{Survey, SurveyReport};
