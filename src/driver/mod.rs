//! Frame-driven simulation time base
//!
//! Converts rendering callbacks into a monotonic simulation clock that does
//! not depend on how often the host delivers frames. Frame registration and
//! wall-clock reads go through the [`FrameScheduler`] and [`Clock`] traits
//! so the driver can run under real timers or be stepped deterministically.

mod clock;
mod scheduler;
mod time_driver;

pub use clock::*;
pub use scheduler::*;
pub use time_driver::*;
