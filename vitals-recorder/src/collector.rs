//! Metrics recorder implementation

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use tokio::sync::RwLock;
use tracing::{trace, warn};

use vitals_core::{DiskStats, MetricsSnapshot, ResponseTimeWindow, format_uptime};
use vitals_probe::{DiskProbe, ResourceProbe, SystemProbe, select_disk_probe};

use crate::config::RecorderConfig;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// In-process metrics recorder for a server process
///
/// Construct one recorder at process start and share the handle with the
/// request-handling code; cloning is cheap and clones share the same state.
/// Recording operations serialize through an internal lock, so a reader
/// calling [`snapshot`](Self::snapshot) always sees a coherent view. The
/// resource probe pass launched by [`record`](Self::record) runs as a
/// detached task; successive passes race last-writer-wins over the resource
/// fields and are never awaited on the request path.
#[derive(Clone)]
pub struct MetricsRecorder {
    config: RecorderConfig,
    started_at: Instant,
    state: Arc<RwLock<State>>,
    resource_probe: Arc<dyn ResourceProbe>,
    disk_probe: Arc<dyn DiskProbe>,
}

struct State {
    snapshot: MetricsSnapshot,
    window: ResponseTimeWindow,
}

impl MetricsRecorder {
    /// Create a recorder with the production probes for this target
    pub async fn new(config: RecorderConfig) -> Self {
        Self::with_probes(
            config,
            Arc::new(SystemProbe::new()),
            Arc::from(select_disk_probe()),
        )
        .await
    }

    /// Create a recorder with explicit probe implementations
    pub async fn with_probes(
        config: RecorderConfig,
        resource_probe: Arc<dyn ResourceProbe>,
        disk_probe: Arc<dyn DiskProbe>,
    ) -> Self {
        let mut snapshot = MetricsSnapshot::default();

        // Total memory only moves on hardware changes; read it once here.
        match resource_probe.memory().await {
            Ok(memory) => snapshot.resources.ram.total_gib = to_gib(memory.total_bytes),
            Err(err) => warn!("memory probe failed during construction: {err}"),
        }

        let window = ResponseTimeWindow::new(config.response_time_window);

        Self {
            config,
            started_at: Instant::now(),
            state: Arc::new(RwLock::new(State { snapshot, window })),
            resource_probe,
            disk_probe,
        }
    }

    /// Count one request
    ///
    /// The path is not yet aggregated per route; it is accepted for future
    /// per-path breakdowns and surfaces in trace logging.
    pub async fn record_request(&self, path: &str) {
        if !self.config.enabled {
            return;
        }
        trace!(path, "recording request");
        self.state.write().await.snapshot.total_requests += 1;
    }

    /// Count one error
    ///
    /// Codes of 500 and above also count toward the server-error subset.
    /// The recorder does not validate the code; the caller decides what
    /// qualifies as an error.
    pub async fn record_error(&self, response_code: u16) {
        if !self.config.enabled {
            return;
        }
        let mut state = self.state.write().await;
        state.snapshot.errors.total_errors += 1;
        if response_code >= 500 {
            state.snapshot.errors.total_http_errors += 1;
        }
    }

    /// Current wall-clock time in milliseconds since the Unix epoch
    ///
    /// The caller keeps the returned token and passes it back to
    /// [`record_latency`](Self::record_latency) or [`record`](Self::record)
    /// once the request has been handled.
    pub fn start_timer(&self) -> u64 {
        epoch_millis()
    }

    /// Record the latency of a request started at `started_ms`
    ///
    /// Pushes the sample into the bounded window, raises the peak if
    /// exceeded, and recomputes the windowed average, all under one lock
    /// acquisition. Returns the measured latency in milliseconds.
    pub async fn record_latency(&self, started_ms: u64) -> f64 {
        let latency_ms = epoch_millis().saturating_sub(started_ms) as f64;
        if !self.config.enabled {
            return latency_ms;
        }

        let mut state = self.state.write().await;
        state.window.push(latency_ms);
        let stats = state.window.stats();
        state.snapshot.response_time = stats;
        latency_ms
    }

    /// Recompute the formatted uptime string
    pub async fn refresh_uptime(&self) {
        let formatted = format_uptime(self.uptime_secs());
        self.state.write().await.snapshot.uptime = formatted;
    }

    /// Recompute throughput as requests per second of process uptime
    ///
    /// Stays 0 until a whole second of uptime has elapsed.
    pub async fn refresh_throughput(&self) {
        let uptime_secs = self.uptime_secs();
        let mut state = self.state.write().await;
        state.snapshot.throughput = if uptime_secs > 0 {
            state.snapshot.total_requests as f64 / uptime_secs as f64
        } else {
            0.0
        };
    }

    /// Refresh the resource figures from the probes
    ///
    /// Each probe failure is logged and swallowed; the affected fields keep
    /// their last-known values. Nothing here reaches the request path.
    pub async fn probe_resources(&self) {
        match self.resource_probe.memory().await {
            Ok(memory) => {
                let mut state = self.state.write().await;
                state.snapshot.resources.ram.free_gib = to_gib(memory.free_bytes);
            }
            Err(err) => warn!("memory probe failed: {err}"),
        }

        match self.resource_probe.cpu().await {
            Ok(cpu) => {
                let mut state = self.state.write().await;
                let processor = &mut state.snapshot.resources.processor;
                processor.model = cpu.model;
                processor.threads = cpu.threads;
                processor.load_average = cpu.load_average;
            }
            Err(err) => warn!("cpu probe failed: {err}"),
        }

        match self.disk_probe.usage().await {
            Ok(usage) => {
                let mut state = self.state.write().await;
                state.snapshot.resources.disk = DiskStats {
                    total: usage.total,
                    used: usage.used,
                    free: usage.free,
                };
            }
            Err(err) => warn!("disk probe failed: {err}"),
        }
    }

    /// Record one handled request
    ///
    /// The single per-request entry point: latency, uptime, throughput, a
    /// detached resource probe pass, the request count, and an error count
    /// for response codes of 300 and above. Throughput is computed before
    /// the request counter moves, so it lags by one request until the next
    /// call recomputes it.
    pub async fn record(&self, started_ms: u64, path: &str, response_code: u16) {
        if !self.config.enabled {
            return;
        }

        self.record_latency(started_ms).await;
        self.refresh_uptime().await;
        self.refresh_throughput().await;

        if self.config.probe_resources {
            let recorder = self.clone();
            tokio::spawn(async move { recorder.probe_resources().await });
        }

        self.record_request(path).await;
        if response_code >= 300 {
            self.record_error(response_code).await;
        }
    }

    /// Owned copy of the current metrics
    pub async fn snapshot(&self) -> MetricsSnapshot {
        self.state.read().await.snapshot.clone()
    }

    /// Whole seconds since the recorder was constructed
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch
fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Convert bytes to GiB, rounded to two decimals
fn to_gib(bytes: u64) -> f64 {
    let gib = bytes as f64 / BYTES_PER_GIB;
    (gib * 100.0).round() / 100.0
}
