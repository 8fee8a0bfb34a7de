//! Survey configuration.

/// Controls the offline survey of the full lineup space.
///
/// # Examples
///
/// ```
/// use formulab::estimate::SurveyConfig;
///
/// let config = SurveyConfig::default()
///     .with_progress_interval(50_000)
///     .with_parallel(false);
/// assert_eq!(config.progress_interval, 50_000);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyConfig {
    /// Log progress every this many examined lineups (0 to disable).
    ///
    /// Parallel runs count whole driver subsets at a time, so each event
    /// fires at the first count at or past a multiple of the interval and
    /// events may arrive out of order.
    pub progress_interval: u64,

    /// Whether to split the driver subsets across rayon workers.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    pub parallel: bool,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            progress_interval: 100_000,
            parallel: true,
        }
    }
}

impl SurveyConfig {
    /// Sets the progress logging interval.
    pub fn with_progress_interval(mut self, n: u64) -> Self {
        self.progress_interval = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
