//! Sliding-window sample recorder

use nalgebra::Vector2;

use crate::sample::Sample;

/// Default number of samples a live session retains
pub const SAMPLE_BUFFER_CAPACITY: usize = 500;

/// Bounded, insertion-ordered window of the most recent samples.
///
/// Samples are stored in a ring. Once the buffer is full, each append
/// overwrites the oldest entry, so the length never exceeds the capacity.
/// Readers only ever get shared views in chronological order.
///
/// # Example
///
/// ```ignore
/// let mut buffer = SampleBuffer::new();
/// buffer.append(solver.sample(t));
///
/// for sample in buffer.iter() {
///     println!("t={}, x={}", sample.time, sample.displacement);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    /// Ring storage, grows up to `capacity`
    buffer: Vec<Sample>,
    capacity: usize,
    /// Next slot to overwrite once full; equals `buffer.len()` until then
    write_index: usize,
}

impl SampleBuffer {
    /// Buffer holding the last [`SAMPLE_BUFFER_CAPACITY`] samples
    pub fn new() -> Self {
        Self::with_capacity(SAMPLE_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Buffer capacity must be positive");

        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            write_index: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get number of retained samples
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// Push a sample, evicting the oldest one when at capacity
    pub fn append(&mut self, sample: Sample) {
        if self.buffer.len() < self.capacity {
            self.buffer.push(sample);
        } else {
            self.buffer[self.write_index] = sample;
        }
        self.write_index = (self.write_index + 1) % self.capacity;
    }

    /// Drop all samples
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.write_index = 0;
    }

    /// Contents as (older, newer) slices; concatenated they are chronological
    pub fn as_slices(&self) -> (&[Sample], &[Sample]) {
        let (newer, older) = self.buffer.split_at(self.write_index);
        (older, newer)
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample> + ExactSizeIterator + '_ {
        let (older, newer) = self.as_slices();
        // Chain is not ExactSizeIterator; rebuild from indices instead
        let len = older.len() + newer.len();
        (0..len).map(move |i| {
            if i < older.len() {
                &older[i]
            } else {
                &newer[i - older.len()]
            }
        })
    }

    /// Copy of the contents in chronological order
    pub fn to_vec(&self) -> Vec<Sample> {
        let (older, newer) = self.as_slices();
        let mut result = Vec::with_capacity(self.len());
        result.extend_from_slice(older);
        result.extend_from_slice(newer);
        result
    }

    /// Oldest retained sample
    pub fn first(&self) -> Option<&Sample> {
        self.iter().next()
    }

    /// Most recent sample
    pub fn last(&self) -> Option<&Sample> {
        if self.buffer.is_empty() {
            return None;
        }

        let idx = if self.write_index == 0 {
            self.buffer.len() - 1
        } else {
            self.write_index - 1
        };

        self.buffer.get(idx)
    }

    /// `(time, value)` pairs for one projected quantity
    pub fn channel<F>(&self, f: F) -> Vec<(f64, f64)>
    where
        F: Fn(&Sample) -> f64,
    {
        self.iter().map(|s| (s.time, f(s))).collect()
    }

    /// Phase-space trace (displacement, velocity)
    pub fn phase_space(&self) -> Vec<Vector2<f64>> {
        self.iter().map(Sample::phase_point).collect()
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
