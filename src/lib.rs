//! oscsim - Analytic oscillator simulation engine
//!
//! Closed-form solutions of a damped spring-mass system and a damped simple
//! pendulum, driven in real time by rendering frames or sampled in batch on a
//! fixed grid.
//!
//! # Architecture
//!
//! - [`DerivedQuantities`]: ω, T and f from a parameter set
//! - [`Solver`]: pure `(parameters, t) -> Sample` evaluation
//! - [`TimeDriver`]: frame-rate independent simulation clock behind a
//!   [`FrameScheduler`] and an injected [`Clock`]
//! - [`SampleBuffer`]: sliding window of the most recent samples
//! - [`trajectory`]: precomputed series over whole periods
//! - [`SimulationSession`]: owns one solver, driver and buffer
//!
//! # Example
//!
//! ```rust,ignore
//! use oscsim::prelude::*;
//!
//! let params = find_preset("Damped Pendulum").unwrap().parameters;
//! let series = generate_series(&params, TrajectoryOptions::chart())?;
//! for s in &series {
//!     println!("{:.3} {:.4}", s.time, s.displacement);
//! }
//! ```

pub mod buffer;
pub mod config;
pub mod derived;
pub mod driver;
pub mod error;
pub mod export;
pub mod sample;
pub mod session;
pub mod solver;
pub mod trajectory;

pub use oscsim_types as types;

pub use buffer::{SampleBuffer, SAMPLE_BUFFER_CAPACITY};
pub use config::EngineConfig;
pub use derived::DerivedQuantities;
pub use driver::{
    Clock, FrameHandle, FrameScheduler, FrameTick, ImmediateScheduler, ManualClock,
    ManualScheduler, SystemClock, TimeDriver,
};
pub use error::{Result, SimError};
pub use sample::Sample;
pub use session::SimulationSession;
pub use solver::Solver;
pub use trajectory::{generate_series, Series, TrajectoryOptions};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::buffer::SampleBuffer;
    pub use crate::config::EngineConfig;
    pub use crate::derived::DerivedQuantities;
    pub use crate::driver::*;
    pub use crate::error::{Result, SimError};
    pub use crate::sample::Sample;
    pub use crate::session::SimulationSession;
    pub use crate::solver::Solver;
    pub use crate::trajectory::{generate_series, Series, TrajectoryOptions};
    pub use oscsim_types::{
        find_preset, InvalidParameterError, Parameters, PendulumParameters, Preset,
        SimulationRecord, SimulationVariant, SpringParameters, PRESETS,
    };
}
