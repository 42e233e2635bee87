//! Bounded sliding window of response-time samples

use std::collections::VecDeque;

use crate::snapshot::ResponseTimeStats;

/// Capacity-bounded FIFO of latency samples with a running peak
///
/// Pushing at capacity evicts the oldest sample. The peak tracks the
/// largest latency ever pushed and is unaffected by eviction, so it is
/// non-decreasing for the life of the window. The average covers only the
/// samples currently held.
#[derive(Debug, Clone)]
pub struct ResponseTimeWindow {
    samples: VecDeque<f64>,
    capacity: usize,
    peak_ms: f64,
}

impl ResponseTimeWindow {
    /// Create a window holding at most `capacity` samples
    ///
    /// A capacity of 0 is clamped to 1 so the window can always hold the
    /// latest sample.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            peak_ms: 0.0,
        }
    }

    /// Push a latency sample, evicting the oldest if at capacity
    pub fn push(&mut self, latency_ms: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(latency_ms);

        if latency_ms > self.peak_ms {
            self.peak_ms = latency_ms;
        }
    }

    /// Arithmetic mean of the current window
    ///
    /// Returns 0 when the window is empty or the mean is not positive.
    pub fn average_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mean = self.samples.iter().sum::<f64>() / self.samples.len() as f64;
        if mean > 0.0 { mean } else { 0.0 }
    }

    /// Largest latency ever pushed
    pub fn peak_ms(&self) -> f64 {
        self.peak_ms
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples the window holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Materialize the window into snapshot statistics
    pub fn stats(&self) -> ResponseTimeStats {
        ResponseTimeStats {
            samples: self.samples.iter().copied().collect(),
            average_ms: self.average_ms(),
            peak_ms: self.peak_ms,
        }
    }
}
