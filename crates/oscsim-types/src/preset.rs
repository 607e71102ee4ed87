//! Named parameter presets.

use serde::Serialize;

use crate::params::{Parameters, PendulumParameters, SimulationVariant, SpringParameters};
use crate::{DEFAULT_SIMULATION_SPEED, STANDARD_GRAVITY};

/// A named constant parameter set users can start a session from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Parameters,
}

impl Preset {
    pub fn variant(&self) -> SimulationVariant {
        self.parameters.variant()
    }

    /// Lowercase, dash-separated form of the name (`"Soft Spring"` -> `"soft-spring"`)
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

/// Built-in presets
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Soft Spring",
        description: "Light spring, slow undamped oscillation",
        parameters: Parameters::Spring(SpringParameters {
            mass: 2.0,
            spring_constant: 20.0,
            amplitude: 1.5,
            damping: 0.0,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
        }),
    },
    Preset {
        name: "Stiff Spring",
        description: "Heavy spring constant, fast oscillation",
        parameters: Parameters::Spring(SpringParameters {
            mass: 1.0,
            spring_constant: 100.0,
            amplitude: 0.5,
            damping: 0.0,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
        }),
    },
    Preset {
        name: "Damped Spring",
        description: "Spring losing energy to friction",
        parameters: Parameters::Spring(SpringParameters {
            mass: 1.0,
            spring_constant: 25.0,
            amplitude: 1.0,
            damping: 0.3,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
        }),
    },
    Preset {
        name: "Simple Pendulum",
        description: "One-meter pendulum released from a small angle",
        parameters: Parameters::Pendulum(PendulumParameters {
            mass: 1.0,
            length: 1.0,
            gravity: STANDARD_GRAVITY,
            angle: 0.3,
            damping: 0.0,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
        }),
    },
    Preset {
        name: "Damped Pendulum",
        description: "Pendulum with light air resistance",
        parameters: Parameters::Pendulum(PendulumParameters {
            mass: 2.0,
            length: 2.0,
            gravity: STANDARD_GRAVITY,
            angle: 0.5,
            damping: 0.05,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
        }),
    },
    Preset {
        name: "Long Pendulum",
        description: "Ten-meter pendulum with a long period",
        parameters: Parameters::Pendulum(PendulumParameters {
            mass: 5.0,
            length: 10.0,
            gravity: STANDARD_GRAVITY,
            angle: 0.2,
            damping: 0.0,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
        }),
    },
];

/// Find a preset by display name or slug, ignoring case
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let wanted = name.trim().to_lowercase();
    PRESETS
        .iter()
        .find(|p| p.name.to_lowercase() == wanted || p.slug() == wanted)
}

/// Presets of one oscillator variant, in catalogue order
pub fn presets_for(variant: SimulationVariant) -> impl Iterator<Item = &'static Preset> {
    PRESETS.iter().filter(move |p| p.variant() == variant)
}
