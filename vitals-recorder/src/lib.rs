//! In-process metrics recording for server processes
//!
//! This crate provides the recorder a request-handling host calls into:
//! - Request, error, and server-error counters
//! - Response-time tracking over a bounded sliding window with a running peak
//! - Formatted process uptime and request throughput
//! - Background system-resource refreshes (CPU, RAM, disk) that never block
//!   the request path
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vitals_recorder::{MetricsRecorder, RecorderConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Construct one recorder at process start and share the handle with
//!     // whatever serves requests.
//!     let recorder = MetricsRecorder::new(RecorderConfig::default()).await;
//!
//!     // Per request: take a timer token before handling, record after.
//!     let started = recorder.start_timer();
//!     // ... handle the request ...
//!     recorder.record(started, "/api/users", 200).await;
//!
//!     // An exporter reads the full state at any time.
//!     let snapshot = recorder.snapshot().await;
//!     println!("requests so far: {}", snapshot.total_requests);
//! }
//! ```

pub mod collector;
pub mod config;

pub use collector::MetricsRecorder;
pub use config::RecorderConfig;

/// Default recorder configuration
pub fn default_config() -> RecorderConfig {
    RecorderConfig::default()
}



#[cfg(test)]
mod lib_tests;
