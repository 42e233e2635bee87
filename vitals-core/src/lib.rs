//! Core data model for the vitals metrics recorder
//!
//! This crate holds the pure parts of the recorder: the snapshot structure
//! an exporter consumes, the bounded response-time window, and the uptime
//! breakdown. Nothing in here touches the operating system or the clock;
//! the recorder crate feeds elapsed seconds and latency samples in and
//! reads the snapshot back out.
//!
//! # Quick Start
//!
//! ```rust
//! use vitals_core::{ResponseTimeWindow, format_uptime};
//!
//! let mut window = ResponseTimeWindow::new(10);
//! window.push(12.0);
//! window.push(48.0);
//! assert_eq!(window.average_ms(), 30.0);
//! assert_eq!(window.peak_ms(), 48.0);
//!
//! assert_eq!(
//!     format_uptime(3661),
//!     "0 Years, 0 Months, 0 Days, 1 Hours, 1 Min, 1 Sec"
//! );
//! ```

pub mod error;
pub mod snapshot;
pub mod uptime;
pub mod window;

pub use error::{Result, VitalsError};
pub use snapshot::{
    DiskStats, ErrorCounters, LoadAverage, MetricsSnapshot, ProcessorStats, RamStats,
    ResourceStats, ResponseTimeStats,
};
pub use uptime::{UptimeBreakdown, format_uptime};
pub use window::ResponseTimeWindow;



#[cfg(test)]
mod window_tests;
