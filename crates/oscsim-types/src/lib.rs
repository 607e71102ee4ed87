//! Shared types for oscsim.
//!
//! This crate defines the data structures exchanged between the simulation
//! engine and its collaborators:
//! - Oscillator variants and their physical parameter sets
//! - Parameter validation errors
//! - Named parameter presets
//! - The persistence record handed to external stores

mod error;
mod params;
mod preset;
mod record;

pub use error::*;
pub use params::*;
pub use preset::*;
pub use record::*;

/// Standard gravitational acceleration (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Default playback rate of simulation time relative to wall-clock time
pub const DEFAULT_SIMULATION_SPEED: f64 = 1.0;
