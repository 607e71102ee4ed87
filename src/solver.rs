//! Closed-form oscillator solution
//!
//! Displacement follows `x(t) = A·e^(−γt)·cos(ωt)` with `A` the spring
//! amplitude or the pendulum release angle. The oscillatory term uses the
//! undamped natural frequency ω for every damping level; no reduced damped
//! frequency is derived.

use oscsim_types::{InvalidParameterError, Parameters, SimulationVariant};

use crate::derived::DerivedQuantities;
use crate::sample::Sample;

/// Displacement and its first two time derivatives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub displacement: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

/// Kinematics of the (possibly damped) harmonic solution at time `t`
pub fn kinematics(amplitude: f64, omega: f64, damping: f64, t: f64) -> Kinematics {
    let (sin, cos) = (omega * t).sin_cos();

    if damping == 0.0 {
        return Kinematics {
            displacement: amplitude * cos,
            velocity: -amplitude * omega * sin,
            acceleration: -amplitude * omega * omega * cos,
        };
    }

    let gamma = damping;
    let envelope = amplitude * (-gamma * t).exp();
    Kinematics {
        displacement: envelope * cos,
        velocity: envelope * (-omega * sin - gamma * cos),
        acceleration: envelope * ((gamma * gamma - omega * omega) * cos + 2.0 * gamma * omega * sin),
    }
}

/// Potential and kinetic energy for a displacement/velocity pair
pub fn energies(params: &Parameters, displacement: f64, velocity: f64) -> (f64, f64) {
    match params {
        Parameters::Spring(p) => (
            0.5 * p.spring_constant * displacement * displacement,
            0.5 * p.mass * velocity * velocity,
        ),
        Parameters::Pendulum(p) => {
            let tangential = p.length * velocity;
            (
                p.mass * p.gravity * p.length * (1.0 - displacement.cos()),
                0.5 * p.mass * tangential * tangential,
            )
        }
    }
}

/// Oscillation phase `atan2(−v, ω·x)`, zero when ω is zero
#[inline]
pub fn phase(displacement: f64, velocity: f64, omega: f64) -> f64 {
    if omega == 0.0 {
        return 0.0;
    }
    (-velocity).atan2(omega * displacement)
}

/// Evaluate the oscillator described by `params` at time `t`.
///
/// `omega` is the natural angular frequency from [`DerivedQuantities`].
/// Pure: identical inputs always produce identical samples.
pub fn solve(params: &Parameters, omega: f64, t: f64) -> Sample {
    let k = kinematics(params.amplitude(), omega, params.damping(), t);
    let (potential, kinetic) = energies(params, k.displacement, k.velocity);

    Sample::new(
        t,
        k.displacement,
        k.velocity,
        k.acceleration,
        potential,
        kinetic,
        phase(k.displacement, k.velocity, omega),
    )
}

/// Validated parameters bound to their derived quantities.
///
/// Construction fails fast on an invalid parameter set, so every sample a
/// `Solver` produces comes from finite, well-formed inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solver {
    params: Parameters,
    derived: DerivedQuantities,
}

impl Solver {
    pub fn new(params: Parameters) -> Result<Self, InvalidParameterError> {
        let derived = DerivedQuantities::from_parameters(&params)?;
        Ok(Self { params, derived })
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    pub fn variant(&self) -> SimulationVariant {
        self.params.variant()
    }

    /// Sample at time `t` (seconds)
    #[inline]
    pub fn sample(&self, t: f64) -> Sample {
        solve(&self.params, self.derived.angular_frequency, t)
    }

    /// Sample at each of `times`, preserving order
    pub fn samples<I>(&self, times: I) -> Vec<Sample>
    where
        I: IntoIterator<Item = f64>,
    {
        times.into_iter().map(|t| self.sample(t)).collect()
    }
}
