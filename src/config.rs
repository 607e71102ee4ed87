//! Engine configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::buffer::SAMPLE_BUFFER_CAPACITY;
use crate::error::Result;
use crate::trajectory::{TrajectoryOptions, CHART_PERIODS, DEFAULT_TRAJECTORY_SAMPLES, TRAJECTORY_PERIODS};

/// Tunables of a simulation session. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Samples retained by the live buffer
    #[serde(default = "EngineConfig::default_buffer_capacity")]
    pub buffer_capacity: usize,

    /// Grid intervals of batch series
    #[serde(default = "EngineConfig::default_trajectory_samples")]
    pub trajectory_samples: usize,

    /// Periods spanned by trajectories and phase-space plots
    #[serde(default = "EngineConfig::default_trajectory_periods")]
    pub trajectory_periods: f64,

    /// Periods spanned by time-series charts
    #[serde(default = "EngineConfig::default_chart_periods")]
    pub chart_periods: f64,
}

impl EngineConfig {
    fn default_buffer_capacity() -> usize {
        SAMPLE_BUFFER_CAPACITY
    }
    fn default_trajectory_samples() -> usize {
        DEFAULT_TRAJECTORY_SAMPLES
    }
    fn default_trajectory_periods() -> f64 {
        TRAJECTORY_PERIODS
    }
    fn default_chart_periods() -> f64 {
        CHART_PERIODS
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        Ok(cfg.sanitized())
    }

    /// Read a JSON config file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults
    pub fn sanitized(mut self) -> Self {
        if self.buffer_capacity == 0 {
            warn!("bufferCapacity must be positive, using {}", SAMPLE_BUFFER_CAPACITY);
            self.buffer_capacity = SAMPLE_BUFFER_CAPACITY;
        }
        if !(self.trajectory_periods.is_finite() && self.trajectory_periods > 0.0) {
            warn!(value = self.trajectory_periods, "invalid trajectoryPeriods, using default");
            self.trajectory_periods = TRAJECTORY_PERIODS;
        }
        if !(self.chart_periods.is_finite() && self.chart_periods > 0.0) {
            warn!(value = self.chart_periods, "invalid chartPeriods, using default");
            self.chart_periods = CHART_PERIODS;
        }
        self
    }

    pub fn trajectory_options(&self) -> TrajectoryOptions {
        TrajectoryOptions::new(self.trajectory_samples, self.trajectory_periods)
    }

    pub fn chart_options(&self) -> TrajectoryOptions {
        TrajectoryOptions::new(self.trajectory_samples, self.chart_periods)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: Self::default_buffer_capacity(),
            trajectory_samples: Self::default_trajectory_samples(),
            trajectory_periods: Self::default_trajectory_periods(),
            chart_periods: Self::default_chart_periods(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.buffer_capacity, 500);
        assert_eq!(cfg.trajectory_samples, 200);
        assert_eq!(cfg.trajectory_options(), TrajectoryOptions::trajectory());
        assert_eq!(cfg.chart_options(), TrajectoryOptions::chart());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg = EngineConfig::from_json(r#"{"trajectorySamples": 64, "unknown": true}"#).unwrap();
        assert_eq!(cfg.trajectory_samples, 64);
        assert_eq!(cfg.buffer_capacity, 500);
        assert_eq!(cfg.chart_periods, 3.0);
    }

    #[test]
    fn test_sanitize_out_of_range() {
        let cfg = EngineConfig::from_json(r#"{"bufferCapacity": 0, "chartPeriods": -1}"#).unwrap();
        assert_eq!(cfg.buffer_capacity, 500);
        assert_eq!(cfg.chart_periods, 3.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"bufferCapacity": 120}}"#).unwrap();

        let cfg = EngineConfig::load(file.path()).unwrap();
        assert_eq!(cfg.buffer_capacity, 120);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = EngineConfig::load_or_default(dir.path().join("missing.json"));
        assert_eq!(cfg, EngineConfig::default());
    }
}
