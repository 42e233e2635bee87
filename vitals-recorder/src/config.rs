//! Recorder configuration

use serde::{Deserialize, Serialize};

/// Default number of latency samples kept in the response-time window
pub const DEFAULT_RESPONSE_TIME_WINDOW: usize = 10;

/// Recorder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Enable metrics recording; a disabled recorder turns every recording
    /// operation into a no-op
    pub enabled: bool,
    /// Number of latency samples kept in the sliding window
    pub response_time_window: usize,
    /// Launch a background resource probe pass on each recorded request
    pub probe_resources: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            response_time_window: DEFAULT_RESPONSE_TIME_WINDOW,
            probe_resources: true,
        }
    }
}
