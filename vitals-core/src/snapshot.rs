//! Snapshot types queried by exporters

use serde::{Deserialize, Serialize};

/// Full metrics snapshot for one server process
///
/// One logical instance exists per recorder. All state is transient and
/// starts from zero; nothing survives a restart. The recorder hands out
/// owned clones of this structure, so a consumer always sees a coherent
/// point-in-time view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Total requests observed, monotonically incremented, never reset
    pub total_requests: u64,
    /// Error counters
    pub errors: ErrorCounters,
    /// Human-readable process uptime, recomputed on each recording pass
    pub uptime: String,
    /// Requests per second of process uptime
    pub throughput: f64,
    /// Response-time statistics over the bounded sample window
    pub response_time: ResponseTimeStats,
    /// Most recent system resource figures
    pub resources: ResourceStats,
}

/// Error counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorCounters {
    /// Incremented once per recorded error
    pub total_errors: u64,
    /// Incremented for response codes of 500 and above; subset of `total_errors`
    pub total_http_errors: u64,
}

/// Response-time statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseTimeStats {
    /// Latency samples currently in the window, oldest first, milliseconds
    pub samples: Vec<f64>,
    /// Arithmetic mean of the current window, 0 when the window is empty
    pub average_ms: f64,
    /// Largest latency ever observed, unaffected by window eviction
    pub peak_ms: f64,
}

/// System resource figures, replaced wholesale on each probe pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceStats {
    /// CPU identity and load
    pub processor: ProcessorStats,
    /// Memory figures
    pub ram: RamStats,
    /// Disk figures
    pub disk: DiskStats,
}

/// CPU identity and recent load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorStats {
    /// CPU model string, `"N/A"` until a probe succeeds
    pub model: String,
    /// Logical core count
    pub threads: usize,
    /// 1/5/15-minute load averages
    pub load_average: LoadAverage,
}

/// 1/5/15-minute load averages
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadAverage {
    /// 1-minute load average
    pub one: f64,
    /// 5-minute load average
    pub five: f64,
    /// 15-minute load average
    pub fifteen: f64,
}

/// Memory figures in GiB, rounded to two decimals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RamStats {
    /// Total system memory, captured once at recorder construction
    pub total_gib: f64,
    /// Free system memory, refreshed on each probe pass
    pub free_gib: f64,
}

/// Disk-space figures
///
/// Units depend on the probe that produced them: the POSIX probe reports
/// all three fields in MiB, while the Windows probe reports `free` in GiB
/// and leaves `total` and `used` at 0. See the disk probe documentation
/// in `vitals-probe` for the background on this asymmetry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskStats {
    /// Total disk space
    pub total: f64,
    /// Used disk space
    pub used: f64,
    /// Free disk space
    pub free: f64,
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self {
            total_requests: 0,
            errors: ErrorCounters::default(),
            uptime: crate::uptime::format_uptime(0),
            throughput: 0.0,
            response_time: ResponseTimeStats::default(),
            resources: ResourceStats::default(),
        }
    }
}

impl Default for ResourceStats {
    fn default() -> Self {
        Self {
            processor: ProcessorStats::default(),
            ram: RamStats::default(),
            disk: DiskStats::default(),
        }
    }
}

impl Default for ProcessorStats {
    fn default() -> Self {
        Self {
            model: "N/A".to_string(),
            threads: 0,
            load_average: LoadAverage::default(),
        }
    }
}
