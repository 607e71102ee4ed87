//! Live simulation session
//!
//! A session owns everything one running oscillator needs: the validated
//! solver, the frame-driven clock and the sliding window of recent samples.
//! Nothing is shared between sessions. A host that drives a session from
//! several threads must wrap it in a mutex.

use chrono::{DateTime, Utc};
use oscsim_types::{InvalidParameterError, Parameters, SimulationRecord, SimulationVariant};
use tracing::{debug, info, warn};

use crate::buffer::SampleBuffer;
use crate::config::EngineConfig;
use crate::derived::DerivedQuantities;
use crate::driver::{Clock, FrameScheduler, FrameTick, TimeDriver};
use crate::sample::Sample;
use crate::solver::Solver;
use crate::trajectory::{self, Series, TrajectoryOptions};

/// One running oscillator.
///
/// # Example
///
/// ```ignore
/// let clock = ManualClock::new(0.0);
/// let mut session = SimulationSession::new(params, ManualScheduler::new(), clock.clone())?;
/// session.start();
/// for _ in 0..60 {
///     session.tick();
///     clock.advance(16.0);
/// }
/// println!("{} samples", session.samples().len());
/// ```
#[derive(Debug)]
pub struct SimulationSession<S: FrameScheduler, C: Clock> {
    solver: Solver,
    driver: TimeDriver<S>,
    buffer: SampleBuffer,
    clock: C,
    config: EngineConfig,
}

impl<S: FrameScheduler, C: Clock> SimulationSession<S, C> {
    /// Create a stopped session with the default configuration.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidParameterError`] before any sample is produced
    /// when `params` cannot drive a simulation.
    pub fn new(params: Parameters, scheduler: S, clock: C) -> Result<Self, InvalidParameterError> {
        Self::with_config(params, scheduler, clock, EngineConfig::default())
    }

    pub fn with_config(
        params: Parameters,
        scheduler: S,
        clock: C,
        config: EngineConfig,
    ) -> Result<Self, InvalidParameterError> {
        let solver = Solver::new(params).inspect_err(|err| {
            warn!(%err, "rejected session parameters");
        })?;

        let config = config.sanitized();
        info!(
            variant = %solver.variant(),
            period = solver.derived().period,
            capacity = config.buffer_capacity,
            "session created"
        );

        Ok(Self {
            driver: TimeDriver::new(scheduler, params.simulation_speed()),
            buffer: SampleBuffer::with_capacity(config.buffer_capacity),
            solver,
            clock,
            config,
        })
    }

    pub fn start(&mut self) {
        self.driver.start();
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Deliver a rendering frame stamped `timestamp_ms`.
    ///
    /// When the clock advances, the oscillator is solved at the new
    /// simulation time and the sample is appended to the buffer. Returns the
    /// appended sample, or `None` for baseline frames and frames that arrive
    /// while stopped.
    pub fn frame(&mut self, timestamp_ms: f64) -> Option<&Sample> {
        let solver = &self.solver;
        let buffer = &mut self.buffer;
        let mut appended = false;

        self.driver.on_frame(timestamp_ms, |tick: FrameTick| {
            buffer.append(solver.sample(tick.elapsed));
            appended = true;
        });

        if appended {
            self.buffer.last()
        } else {
            None
        }
    }

    /// Deliver a frame stamped with the session clock's current reading
    pub fn tick(&mut self) -> Option<&Sample> {
        let now = self.clock.now_ms();
        self.frame(now)
    }

    /// Empty the buffer and rewind simulation time to zero.
    ///
    /// A running session keeps running; its next frame sets a fresh baseline.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.driver.reset();
        debug!("session reset");
    }

    /// Swap in a new parameter set.
    ///
    /// Derived quantities are recomputed and the new speed applies from the
    /// next frame. Simulation time is kept. Recorded samples are kept too,
    /// unless the variant changes: displacement units differ between
    /// variants, so the buffer is emptied. On error the previous parameters
    /// stay in effect.
    pub fn set_parameters(&mut self, params: Parameters) -> Result<(), InvalidParameterError> {
        let solver = Solver::new(params).inspect_err(|err| {
            warn!(%err, "rejected parameter update");
        })?;

        if solver.variant() != self.solver.variant() {
            debug!(
                from = %self.solver.variant(),
                to = %solver.variant(),
                "variant changed, clearing buffer"
            );
            self.buffer.reset();
        }

        self.driver.set_speed(params.simulation_speed());
        self.solver = solver;
        debug!(
            variant = %solver.variant(),
            period = solver.derived().period,
            "parameters updated"
        );
        Ok(())
    }

    pub fn parameters(&self) -> &Parameters {
        self.solver.parameters()
    }

    pub fn variant(&self) -> SimulationVariant {
        self.solver.variant()
    }

    pub fn derived(&self) -> &DerivedQuantities {
        self.solver.derived()
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Simulation time (s)
    pub fn time(&self) -> f64 {
        self.driver.elapsed()
    }

    /// Solution at the current simulation time
    pub fn current_sample(&self) -> Sample {
        self.solver.sample(self.time())
    }

    /// Recent samples, oldest first
    pub fn samples(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// Batch series for the current parameters
    pub fn series(&self, options: TrajectoryOptions) -> Result<Series, InvalidParameterError> {
        trajectory::generate(&self.solver, options)
    }

    /// Trajectory over the configured number of periods
    pub fn trajectory(&self) -> Result<Series, InvalidParameterError> {
        self.series(self.config.trajectory_options())
    }

    /// Chart series over the configured number of periods
    pub fn chart(&self) -> Result<Series, InvalidParameterError> {
        self.series(self.config.chart_options())
    }

    /// Persistence record for the current parameters
    pub fn to_record(
        &self,
        id: impl Into<String>,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> SimulationRecord {
        SimulationRecord::new(id, title, *self.parameters(), created_at)
    }

    pub fn scheduler(&self) -> &S {
        self.driver.scheduler()
    }
}

impl<S: FrameScheduler, C: Clock> Drop for SimulationSession<S, C> {
    fn drop(&mut self) {
        self.driver.stop();
        debug!(time = self.driver.elapsed(), "session torn down");
    }
}
