//! Precomputed trajectories over a whole number of periods
//!
//! Batch series feed static charts and phase-space plots. They are computed
//! on a fixed time grid and never touch a live session's buffer or clock.

use nalgebra::Vector2;
use oscsim_types::{Constraint, InvalidParameterError, Parameters, SimulationVariant};
use serde::{Deserialize, Serialize};

use crate::derived::DerivedQuantities;
use crate::sample::Sample;
use crate::solver::Solver;

/// Default number of grid intervals
pub const DEFAULT_TRAJECTORY_SAMPLES: usize = 200;

/// Periods spanned by a general trajectory
pub const TRAJECTORY_PERIODS: f64 = 2.0;

/// Periods spanned by a time-series chart
pub const CHART_PERIODS: f64 = 3.0;

/// Grid resolution and span of a generated series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryOptions {
    /// Number of grid intervals N; the series holds N + 1 samples
    pub samples: usize,
    /// Duration in multiples of the oscillation period
    pub periods: f64,
}

impl TrajectoryOptions {
    pub fn new(samples: usize, periods: f64) -> Self {
        Self { samples, periods }
    }

    /// Two periods at the default resolution
    pub fn trajectory() -> Self {
        Self::new(DEFAULT_TRAJECTORY_SAMPLES, TRAJECTORY_PERIODS)
    }

    /// Three periods at the default resolution
    pub fn chart() -> Self {
        Self::new(DEFAULT_TRAJECTORY_SAMPLES, CHART_PERIODS)
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// The span must be a finite, strictly positive number of periods
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        if !self.periods.is_finite() {
            return Err(InvalidParameterError::new("periods", self.periods, Constraint::Finite));
        }
        if self.periods <= 0.0 {
            return Err(InvalidParameterError::new("periods", self.periods, Constraint::Positive));
        }
        Ok(())
    }
}

impl Default for TrajectoryOptions {
    fn default() -> Self {
        Self::trajectory()
    }
}

/// Immutable, evenly spaced sequence of samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    variant: SimulationVariant,
    derived: DerivedQuantities,
    options: TrajectoryOptions,
    samples: Vec<Sample>,
}

impl Series {
    pub fn variant(&self) -> SimulationVariant {
        self.variant
    }

    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    pub fn options(&self) -> &TrajectoryOptions {
        &self.options
    }

    /// Time spanned by the grid (s)
    pub fn duration(&self) -> f64 {
        self.options.periods * self.derived.period
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// `(time, value)` pairs for one projected quantity
    pub fn channel<F>(&self, f: F) -> Vec<(f64, f64)>
    where
        F: Fn(&Sample) -> f64,
    {
        self.samples.iter().map(|s| (s.time, f(s))).collect()
    }

    /// Displacement against velocity at every grid point
    pub fn phase_space(&self) -> Vec<Vector2<f64>> {
        self.samples.iter().map(Sample::phase_point).collect()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Sample `solver` at `t_i = (i / N) · periods · T` for `i = 0..=N`.
///
/// With `N == 0` the series holds the single sample at `t = 0`. Fails when
/// `options.periods` is not a finite positive number.
pub fn generate(solver: &Solver, options: TrajectoryOptions) -> Result<Series, InvalidParameterError> {
    options.validate()?;

    let derived = *solver.derived();
    let duration = options.periods * derived.period;
    let n = options.samples;

    let samples = if n == 0 {
        vec![solver.sample(0.0)]
    } else {
        (0..=n)
            .map(|i| solver.sample(i as f64 / n as f64 * duration))
            .collect()
    };

    Ok(Series {
        variant: solver.variant(),
        derived,
        options,
        samples,
    })
}

/// Validate `params` and `options`, then generate the series
pub fn generate_series(
    params: &Parameters,
    options: TrajectoryOptions,
) -> Result<Series, InvalidParameterError> {
    let solver = Solver::new(*params)?;
    generate(&solver, options)
}
