//! Oscillator variants and their physical parameter sets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{finite, non_negative, positive, InvalidParameterError};
use crate::{DEFAULT_SIMULATION_SPEED, STANDARD_GRAVITY};

/// Supported oscillator models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationVariant {
    /// Damped spring-mass system, displacement in meters
    Spring,
    /// Damped simple pendulum (small-angle), displacement in radians
    Pendulum,
}

impl SimulationVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationVariant::Spring => "spring",
            SimulationVariant::Pendulum => "pendulum",
        }
    }

    /// Unit of the displacement channel
    pub fn displacement_unit(&self) -> &'static str {
        match self {
            SimulationVariant::Spring => "m",
            SimulationVariant::Pendulum => "rad",
        }
    }
}

impl fmt::Display for SimulationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_simulation_speed() -> f64 {
    DEFAULT_SIMULATION_SPEED
}

fn default_gravity() -> f64 {
    STANDARD_GRAVITY
}

/// Spring-mass parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpringParameters {
    /// Mass (kg), > 0
    pub mass: f64,
    /// Spring constant k (N/m), > 0
    pub spring_constant: f64,
    /// Initial displacement (m), >= 0
    pub amplitude: f64,
    /// Exponential decay rate γ (1/s), >= 0
    #[serde(default)]
    pub damping: f64,
    /// Simulation seconds per wall-clock second, > 0
    #[serde(default = "default_simulation_speed")]
    pub simulation_speed: f64,
}

impl SpringParameters {
    pub fn new(mass: f64, spring_constant: f64, amplitude: f64) -> Self {
        Self {
            mass,
            spring_constant,
            amplitude,
            damping: 0.0,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        positive("mass", self.mass)?;
        positive("springConstant", self.spring_constant)?;
        non_negative("amplitude", self.amplitude)?;
        non_negative("damping", self.damping)?;
        positive("simulationSpeed", self.simulation_speed)?;
        Ok(())
    }
}

impl Default for SpringParameters {
    fn default() -> Self {
        Self::new(1.0, 10.0, 1.0)
    }
}

/// Simple pendulum parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendulumParameters {
    /// Bob mass (kg), > 0
    pub mass: f64,
    /// Rod length (m), > 0
    pub length: f64,
    /// Gravitational acceleration (m/s²), > 0
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    /// Initial angular displacement (rad)
    pub angle: f64,
    /// Exponential decay rate γ (1/s), >= 0
    #[serde(default)]
    pub damping: f64,
    /// Simulation seconds per wall-clock second, > 0
    #[serde(default = "default_simulation_speed")]
    pub simulation_speed: f64,
}

impl PendulumParameters {
    pub fn new(mass: f64, length: f64, angle: f64) -> Self {
        Self {
            mass,
            length,
            gravity: STANDARD_GRAVITY,
            angle,
            damping: 0.0,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        positive("mass", self.mass)?;
        positive("length", self.length)?;
        positive("gravity", self.gravity)?;
        finite("angle", self.angle)?;
        non_negative("damping", self.damping)?;
        positive("simulationSpeed", self.simulation_speed)?;
        Ok(())
    }
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.3)
    }
}

/// Physical inputs of one oscillator.
///
/// Serialized internally tagged by `type`, field names in camelCase:
///
/// ```json
/// {"type": "pendulum", "mass": 2, "length": 2, "gravity": 9.81, "angle": 0.5, "damping": 0}
/// ```
///
/// Keys outside the recognized set are ignored on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Parameters {
    Spring(SpringParameters),
    Pendulum(PendulumParameters),
}

impl Parameters {
    pub fn spring(mass: f64, spring_constant: f64, amplitude: f64) -> Self {
        Parameters::Spring(SpringParameters::new(mass, spring_constant, amplitude))
    }

    pub fn pendulum(mass: f64, length: f64, angle: f64) -> Self {
        Parameters::Pendulum(PendulumParameters::new(mass, length, angle))
    }

    /// Replace the damping coefficient
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.set_damping(damping);
        self
    }

    /// Replace the simulation speed
    pub fn with_simulation_speed(mut self, speed: f64) -> Self {
        self.set_simulation_speed(speed);
        self
    }

    pub fn variant(&self) -> SimulationVariant {
        match self {
            Parameters::Spring(_) => SimulationVariant::Spring,
            Parameters::Pendulum(_) => SimulationVariant::Pendulum,
        }
    }

    /// Check every field against its constraint, reporting the first violation
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        match self {
            Parameters::Spring(p) => p.validate(),
            Parameters::Pendulum(p) => p.validate(),
        }
    }

    pub fn mass(&self) -> f64 {
        match self {
            Parameters::Spring(p) => p.mass,
            Parameters::Pendulum(p) => p.mass,
        }
    }

    /// Initial displacement: spring amplitude or pendulum angle
    pub fn amplitude(&self) -> f64 {
        match self {
            Parameters::Spring(p) => p.amplitude,
            Parameters::Pendulum(p) => p.angle,
        }
    }

    pub fn damping(&self) -> f64 {
        match self {
            Parameters::Spring(p) => p.damping,
            Parameters::Pendulum(p) => p.damping,
        }
    }

    pub fn set_damping(&mut self, damping: f64) {
        match self {
            Parameters::Spring(p) => p.damping = damping,
            Parameters::Pendulum(p) => p.damping = damping,
        }
    }

    pub fn simulation_speed(&self) -> f64 {
        match self {
            Parameters::Spring(p) => p.simulation_speed,
            Parameters::Pendulum(p) => p.simulation_speed,
        }
    }

    pub fn set_simulation_speed(&mut self, speed: f64) {
        match self {
            Parameters::Spring(p) => p.simulation_speed = speed,
            Parameters::Pendulum(p) => p.simulation_speed = speed,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters::Spring(SpringParameters::default())
    }
}

impl From<SpringParameters> for Parameters {
    fn from(p: SpringParameters) -> Self {
        Parameters::Spring(p)
    }
}

impl From<PendulumParameters> for Parameters {
    fn from(p: PendulumParameters) -> Self {
        Parameters::Pendulum(p)
    }
}
