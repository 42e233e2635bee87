//! CPU and memory probing via `sysinfo`

use async_trait::async_trait;
use sysinfo::System;

use vitals_core::{LoadAverage, Result};

/// One CPU reading: identity plus recent load
#[derive(Debug, Clone)]
pub struct CpuReading {
    /// CPU model string
    pub model: String,
    /// Logical core count
    pub threads: usize,
    /// 1/5/15-minute load averages
    pub load_average: LoadAverage,
}

/// One memory reading, in bytes
#[derive(Debug, Clone, Copy)]
pub struct MemoryReading {
    /// Total system memory
    pub total_bytes: u64,
    /// Free system memory
    pub free_bytes: u64,
}

/// Capability interface for CPU and memory figures
#[async_trait]
pub trait ResourceProbe: Send + Sync {
    /// Read CPU identity and load averages
    async fn cpu(&self) -> Result<CpuReading>;

    /// Read total and free system memory
    async fn memory(&self) -> Result<MemoryReading>;
}

/// Production probe backed by the `sysinfo` crate
#[derive(Debug, Default)]
pub struct SystemProbe;

impl SystemProbe {
    /// Create a new system probe
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResourceProbe for SystemProbe {
    async fn cpu(&self) -> Result<CpuReading> {
        let mut sys = System::new();
        sys.refresh_cpu_usage(); // required for cpus() to return a non-empty list

        let model = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "N/A".to_string());
        let threads = sys.cpus().len();

        let loads = System::load_average();

        Ok(CpuReading {
            model,
            threads,
            load_average: LoadAverage {
                one: loads.one,
                five: loads.five,
                fifteen: loads.fifteen,
            },
        })
    }

    async fn memory(&self) -> Result<MemoryReading> {
        let mut sys = System::new();
        sys.refresh_memory();

        Ok(MemoryReading {
            total_bytes: sys.total_memory(),
            free_bytes: sys.free_memory(),
        })
    }
}
