//! Error types shared across the vitals workspace

/// Result type alias for vitals operations
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Errors surfaced by the resource and disk probes
///
/// Recording operations never return these to request-handling code; the
/// recorder contains probe failures by logging them and leaving the
/// affected snapshot fields at their last-known values.
#[derive(Debug, thiserror::Error)]
pub enum VitalsError {
    /// Spawning or waiting on an external probe command failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A probe command produced output with an unexpected shape
    #[error("malformed probe output: {0}")]
    MalformedProbeOutput(String),

    /// No disk probe exists for the compile target
    #[error("disk probing is not supported on this platform")]
    UnsupportedPlatform,
}

impl VitalsError {
    /// Create a malformed-output error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedProbeOutput(message.into())
    }
}
