//! Quantities that depend on the parameter set alone

use std::f64::consts::TAU;

use oscsim_types::{Constraint, InvalidParameterError, Parameters};
use serde::Serialize;

/// Natural angular frequency, period and frequency of an oscillator.
///
/// The pendulum uses the small-angle result `ω = √(g/L)`, independent of the
/// release angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedQuantities {
    /// ω (rad/s)
    pub angular_frequency: f64,
    /// T = 2π/ω (s)
    pub period: f64,
    /// f = 1/T (Hz)
    pub frequency: f64,
}

impl DerivedQuantities {
    /// Validate `params` and compute ω, T and f.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError`] when any field violates its
    /// constraint or when the resulting ω is zero or not finite.
    pub fn from_parameters(params: &Parameters) -> Result<Self, InvalidParameterError> {
        params.validate()?;

        let (name, omega) = match params {
            Parameters::Spring(p) => ("springConstant", (p.spring_constant / p.mass).sqrt()),
            Parameters::Pendulum(p) => ("length", (p.gravity / p.length).sqrt()),
        };

        if !omega.is_finite() || omega == 0.0 {
            return Err(InvalidParameterError::new(
                name,
                omega,
                Constraint::AngularFrequency,
            ));
        }

        Ok(Self::from_angular_frequency(omega))
    }

    /// Period and frequency for a known ω
    pub fn from_angular_frequency(angular_frequency: f64) -> Self {
        let period = TAU / angular_frequency;
        Self {
            angular_frequency,
            period,
            frequency: 1.0 / period,
        }
    }
}
