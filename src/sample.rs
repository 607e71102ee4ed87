//! Instantaneous oscillator state

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Kinematic and energy state at one instant.
///
/// Displacement is in meters for the spring and radians for the pendulum;
/// energies are in joules.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// Simulation time (s)
    pub time: f64,
    pub displacement: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub potential_energy: f64,
    pub kinetic_energy: f64,
    /// Always `potential_energy + kinetic_energy`
    pub total_energy: f64,
    /// Oscillation phase (rad)
    pub phase: f64,
}

impl Sample {
    pub fn new(
        time: f64,
        displacement: f64,
        velocity: f64,
        acceleration: f64,
        potential_energy: f64,
        kinetic_energy: f64,
        phase: f64,
    ) -> Self {
        Self {
            time,
            displacement,
            velocity,
            acceleration,
            potential_energy,
            kinetic_energy,
            total_energy: potential_energy + kinetic_energy,
            phase,
        }
    }

    /// Point in phase space: (displacement, velocity)
    #[inline]
    pub fn phase_point(&self) -> Vector2<f64> {
        Vector2::new(self.displacement, self.velocity)
    }
}
