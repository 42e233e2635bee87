//! Resource probes for the vitals metrics recorder
//!
//! This crate is the recorder's boundary to the operating system. It
//! exposes two capability traits and their production implementations:
//!
//! - [`ResourceProbe`]: CPU identity, load averages, and memory figures,
//!   backed by the `sysinfo` crate
//! - [`DiskProbe`]: disk-space figures, backed by a platform-specific
//!   external command selected once at startup
//!
//! The recorder never branches on the host platform itself; it holds
//! whatever probes it was constructed with, and tests substitute in-memory
//! fakes through the same traits.

pub mod disk;
pub mod system;

pub use disk::{
    DiskProbe, DiskUsage, PosixDiskProbe, UnsupportedDiskProbe, WindowsDiskProbe,
    select_disk_probe,
};
pub use system::{CpuReading, MemoryReading, ResourceProbe, SystemProbe};
