//! Disk-space probing via platform-specific external commands

use async_trait::async_trait;
use tokio::process::Command;

use vitals_core::{Result, VitalsError};

const KIB_PER_MIB: f64 = 1024.0;
const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// One disk reading
///
/// The POSIX probe fills all three fields in MiB. The Windows probe only
/// reports `free`, in GiB, and leaves `total` and `used` at 0; `wmic
/// logicaldisk get freespace` simply does not return the other columns,
/// and the gap is kept visible rather than papered over with zeros that
/// look like measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskUsage {
    /// Total disk space
    pub total: f64,
    /// Used disk space
    pub used: f64,
    /// Free disk space
    pub free: f64,
}

/// Capability interface for disk-space figures
#[async_trait]
pub trait DiskProbe: Send + Sync {
    /// Read current disk usage
    async fn usage(&self) -> Result<DiskUsage>;
}

/// Disk probe for POSIX-like hosts, shelling out to `df -k`
#[derive(Debug, Default)]
pub struct PosixDiskProbe;

#[async_trait]
impl DiskProbe for PosixDiskProbe {
    async fn usage(&self) -> Result<DiskUsage> {
        let output = Command::new("df").arg("-k").output().await?;
        if !output.status.success() {
            return Err(VitalsError::malformed(format!(
                "df exited with status {}",
                output.status
            )));
        }
        parse_df_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Disk probe for Windows hosts, shelling out to `wmic`
#[derive(Debug, Default)]
pub struct WindowsDiskProbe;

#[async_trait]
impl DiskProbe for WindowsDiskProbe {
    async fn usage(&self) -> Result<DiskUsage> {
        let output = Command::new("wmic")
            .args(["logicaldisk", "get", "freespace"])
            .output()
            .await?;
        if !output.status.success() {
            return Err(VitalsError::malformed(format!(
                "wmic exited with status {}",
                output.status
            )));
        }
        parse_wmic_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Probe for targets with no disk command mapping
///
/// Every `usage` call resolves to an explicit error, which the recorder
/// logs and skips. The disk fields then keep their defaults instead of
/// waiting on a result that can never arrive.
#[derive(Debug, Default)]
pub struct UnsupportedDiskProbe;

#[async_trait]
impl DiskProbe for UnsupportedDiskProbe {
    async fn usage(&self) -> Result<DiskUsage> {
        Err(VitalsError::UnsupportedPlatform)
    }
}

/// Select the disk probe for the compile target
pub fn select_disk_probe() -> Box<dyn DiskProbe> {
    if cfg!(windows) {
        tracing::debug!("selected wmic disk probe");
        Box::new(WindowsDiskProbe)
    } else if cfg!(unix) {
        tracing::debug!("selected df disk probe");
        Box::new(PosixDiskProbe)
    } else {
        tracing::debug!("no disk probe for this target");
        Box::new(UnsupportedDiskProbe)
    }
}

/// Parse `df -k` output
///
/// The second line is the first filesystem entry; columns 2, 3, and 4
/// (1-indexed) hold total/used/available in KiB, converted to MiB with
/// ceiling rounding.
pub fn parse_df_output(stdout: &str) -> Result<DiskUsage> {
    let line = stdout
        .lines()
        .nth(1)
        .ok_or_else(|| VitalsError::malformed("df output has no data line"))?;
    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() < 4 {
        return Err(VitalsError::malformed(format!(
            "df data line has {} columns, expected at least 4",
            columns.len()
        )));
    }

    let total_kib = parse_number(columns[1], "total")?;
    let used_kib = parse_number(columns[2], "used")?;
    let free_kib = parse_number(columns[3], "available")?;

    Ok(DiskUsage {
        total: (total_kib / KIB_PER_MIB).ceil(),
        used: (used_kib / KIB_PER_MIB).ceil(),
        free: (free_kib / KIB_PER_MIB).ceil(),
    })
}

/// Parse `wmic logicaldisk get freespace` output
///
/// The second line is the first logical disk's free space in bytes,
/// converted to GiB with floor rounding.
pub fn parse_wmic_output(stdout: &str) -> Result<DiskUsage> {
    let line = stdout
        .lines()
        .nth(1)
        .ok_or_else(|| VitalsError::malformed("wmic output has no data line"))?;
    let free_bytes = line.trim().parse::<u64>().map_err(|_| {
        VitalsError::malformed(format!("wmic free-space value {:?} is not a number", line.trim()))
    })?;

    Ok(DiskUsage {
        total: 0.0,
        used: 0.0,
        free: (free_bytes as f64 / BYTES_PER_GIB).floor(),
    })
}

fn parse_number(raw: &str, column: &str) -> Result<f64> {
    raw.parse::<f64>().map_err(|_| {
        VitalsError::malformed(format!("df {column} column {raw:?} is not a number"))
    })
}
