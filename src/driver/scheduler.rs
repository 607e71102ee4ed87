//! Frame registration

use std::cell::RefCell;
use std::rc::Rc;

/// Token identifying one frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host hook for "call me on the next rendering frame".
///
/// The driver holds at most one outstanding request and re-registers after
/// every delivered frame.
pub trait FrameScheduler {
    /// Register interest in the next frame
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a registration; unknown handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// The frame registered under `handle` has been delivered
    fn frame_delivered(&mut self, _handle: FrameHandle) {}
}

/// Scheduler for loops that call the driver themselves every iteration
#[derive(Debug, Clone, Default)]
pub struct ImmediateScheduler {
    next_id: u64,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for ImmediateScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        FrameHandle(self.next_id)
    }

    fn cancel_frame(&mut self, _handle: FrameHandle) {}
}

#[derive(Debug, Default)]
struct ManualState {
    next_id: u64,
    pending: Vec<FrameHandle>,
    requested: u64,
    cancelled: u64,
    delivered: u64,
}

/// Scheduler that records registrations for inspection.
///
/// Clones share state, so a handle kept outside a session can observe
/// whether any request is still outstanding after teardown.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of outstanding requests
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.state.borrow().pending.contains(&handle)
    }

    /// Total requests ever made
    pub fn requested(&self) -> u64 {
        self.state.borrow().requested
    }

    /// Total requests withdrawn before delivery
    pub fn cancelled(&self) -> u64 {
        self.state.borrow().cancelled
    }

    /// Total requests that reached their frame
    pub fn delivered(&self) -> u64 {
        self.state.borrow().delivered
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.requested += 1;
        let handle = FrameHandle(state.next_id);
        state.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut state = self.state.borrow_mut();
        if let Some(pos) = state.pending.iter().position(|h| *h == handle) {
            state.pending.swap_remove(pos);
            state.cancelled += 1;
        }
    }

    fn frame_delivered(&mut self, handle: FrameHandle) {
        let mut state = self.state.borrow_mut();
        if let Some(pos) = state.pending.iter().position(|h| *h == handle) {
            state.pending.swap_remove(pos);
            state.delivered += 1;
        }
    }
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Box<S> {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }

    fn frame_delivered(&mut self, handle: FrameHandle) {
        (**self).frame_delivered(handle)
    }
}
