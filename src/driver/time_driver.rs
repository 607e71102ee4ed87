//! Monotonic simulation clock advanced by rendering frames

use tracing::{debug, trace};

use super::scheduler::{FrameHandle, FrameScheduler};

/// Advance reported to the update step of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Simulation seconds added by this frame
    pub delta: f64,
    /// Simulation seconds accumulated since the last reset
    pub elapsed: f64,
}

/// Converts frame timestamps into simulation time.
///
/// Each delivered frame contributes `(timestamp − previous) / 1000 × speed`
/// seconds. The first frame after [`start`](Self::start) or
/// [`reset`](Self::reset) only records its timestamp as the baseline, so a
/// stale baseline never produces a jump. A timestamp earlier than the
/// baseline contributes nothing, keeping elapsed time monotonic.
///
/// Dropping the driver cancels any outstanding frame request.
#[derive(Debug)]
pub struct TimeDriver<S: FrameScheduler> {
    scheduler: S,
    /// Outstanding frame request; `Some` exactly while running
    pending: Option<FrameHandle>,
    /// Baseline timestamp in milliseconds
    last_timestamp: Option<f64>,
    elapsed: f64,
    speed: f64,
    frames: u64,
}

impl<S: FrameScheduler> TimeDriver<S> {
    /// Create a stopped driver advancing `speed` simulation seconds per second
    pub fn new(scheduler: S, speed: f64) -> Self {
        Self {
            scheduler,
            pending: None,
            last_timestamp: None,
            elapsed: 0.0,
            speed,
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Begin requesting frames. No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.last_timestamp = None;
        self.pending = Some(self.scheduler.request_frame());
        debug!(elapsed = self.elapsed, "time driver started");
    }

    /// Cancel the outstanding frame request. No-op when stopped.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
            debug!(elapsed = self.elapsed, frames = self.frames, "time driver stopped");
        }
    }

    /// Handle a rendering frame delivered at `timestamp_ms`.
    ///
    /// Returns `None` when the driver is stopped; the frame is then ignored.
    /// Otherwise advances the clock, calls `update` unless this frame only
    /// set the baseline, requests the next frame and returns the delta.
    pub fn on_frame<F>(&mut self, timestamp_ms: f64, mut update: F) -> Option<f64>
    where
        F: FnMut(FrameTick),
    {
        let handle = self.pending.take()?;
        self.scheduler.frame_delivered(handle);
        self.frames += 1;

        let delta = match self.last_timestamp {
            None => {
                self.last_timestamp = Some(timestamp_ms);
                trace!(timestamp_ms, "frame baseline");
                None
            }
            Some(last) => {
                // f64::max discards NaN, so a bad timestamp neither moves
                // the baseline nor advances time
                let delta = (timestamp_ms - last).max(0.0) / 1000.0 * self.speed;
                self.last_timestamp = Some(last.max(timestamp_ms));
                Some(delta)
            }
        };

        if let Some(delta) = delta {
            self.elapsed += delta;
            update(FrameTick {
                delta,
                elapsed: self.elapsed,
            });
        }

        self.pending = Some(self.scheduler.request_frame());
        Some(delta.unwrap_or(0.0))
    }

    /// Simulation seconds accumulated since the last reset
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of frames handled since the last reset
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Change the playback rate; applies from the next frame
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Zero the clock and forget the baseline. Running state is unchanged.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frames = 0;
        self.last_timestamp = None;
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<S: FrameScheduler> Drop for TimeDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::ManualScheduler;
    use approx::assert_relative_eq;

    fn driver(speed: f64) -> (TimeDriver<ManualScheduler>, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        (TimeDriver::new(scheduler.clone(), speed), scheduler)
    }

    #[test]
    fn test_first_frame_sets_baseline() {
        let (mut driver, _) = driver(1.0);
        driver.start();

        let mut updates = Vec::new();
        assert_eq!(driver.on_frame(1000.0, |tick| updates.push(tick)), Some(0.0));
        assert!(updates.is_empty());
        assert_eq!(driver.elapsed(), 0.0);

        assert_eq!(driver.on_frame(1016.0, |tick| updates.push(tick)), Some(0.016));
        assert_eq!(updates.len(), 1);
        assert_relative_eq!(updates[0].elapsed, 0.016, epsilon = 1e-12);
    }

    #[test]
    fn test_speed_scales_delta() {
        let (mut driver, _) = driver(2.5);
        driver.start();
        driver.on_frame(0.0, |_| {});
        let delta = driver.on_frame(100.0, |_| {}).unwrap();
        assert_relative_eq!(delta, 0.25, epsilon = 1e-12);

        driver.set_speed(0.5);
        let delta = driver.on_frame(200.0, |_| {}).unwrap();
        assert_relative_eq!(delta, 0.05, epsilon = 1e-12);
        assert_relative_eq!(driver.elapsed(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_rate_independence() {
        // 1 s of wall time at 30 fps and at 144 fps accumulate the same time
        let (mut slow, _) = driver(1.0);
        let (mut fast, _) = driver(1.0);
        slow.start();
        fast.start();

        for i in 0..=30 {
            slow.on_frame(i as f64 * 1000.0 / 30.0, |_| {});
        }
        for i in 0..=144 {
            fast.on_frame(i as f64 * 1000.0 / 144.0, |_| {});
        }

        assert_relative_eq!(slow.elapsed(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(fast.elapsed(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_backwards_timestamp_contributes_nothing() {
        let (mut driver, _) = driver(1.0);
        driver.start();
        driver.on_frame(500.0, |_| {});
        driver.on_frame(600.0, |_| {});

        assert_eq!(driver.on_frame(400.0, |_| {}), Some(0.0));
        assert_relative_eq!(driver.elapsed(), 0.1, epsilon = 1e-12);

        // Baseline stayed at 600
        let delta = driver.on_frame(650.0, |_| {}).unwrap();
        assert_relative_eq!(delta, 0.05, epsilon = 1e-12);

        assert_eq!(driver.on_frame(f64::NAN, |_| {}), Some(0.0));
        assert_relative_eq!(driver.elapsed(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_start_is_idempotent() {
        let (mut driver, scheduler) = driver(1.0);
        driver.start();
        driver.start();
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.requested(), 1);
    }

    #[test]
    fn test_restart_discards_stale_baseline() {
        let (mut driver, _) = driver(1.0);
        driver.start();
        driver.on_frame(0.0, |_| {});
        driver.on_frame(100.0, |_| {});
        driver.stop();

        driver.start();
        // Ten seconds later: the gap must not count
        assert_eq!(driver.on_frame(10_100.0, |_| {}), Some(0.0));
        assert_relative_eq!(driver.elapsed(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_stop_cancels_and_ignores_late_frames() {
        let (mut driver, scheduler) = driver(1.0);
        driver.stop();
        assert_eq!(scheduler.cancelled(), 0);

        driver.start();
        driver.on_frame(0.0, |_| {});
        driver.stop();
        driver.stop();

        assert!(!driver.is_running());
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.cancelled(), 1);

        let mut called = false;
        assert_eq!(driver.on_frame(50.0, |_| called = true), None);
        assert!(!called);
        assert_eq!(driver.elapsed(), 0.0);
    }

    #[test]
    fn test_reset_keeps_running() {
        let (mut driver, _) = driver(1.0);
        driver.start();
        driver.on_frame(0.0, |_| {});
        driver.on_frame(250.0, |_| {});

        driver.reset();
        assert_eq!(driver.elapsed(), 0.0);
        assert_eq!(driver.frames(), 0);
        assert!(driver.is_running());
        assert_eq!(driver.on_frame(900.0, |_| {}), Some(0.0));
    }

    #[test]
    fn test_drop_cancels_pending_request() {
        let scheduler = ManualScheduler::new();
        {
            let mut driver = TimeDriver::new(scheduler.clone(), 1.0);
            driver.start();
            driver.on_frame(0.0, |_| {});
            assert_eq!(scheduler.pending(), 1);
        }
        assert_eq!(scheduler.pending(), 0);
    }
}
