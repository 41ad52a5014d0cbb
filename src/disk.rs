//! Filesystem capacity via block statistics.

use std::path::Path;

/// Capacity of the filesystem holding the inspected root, in bytes.
///
/// All fields are zero when the statistics query failed; that is a degraded
/// result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub usage_percent: f64,
}

/// Queries block statistics for the filesystem holding `root`.
///
/// `total` is blocks times fragment size, `free` is the blocks available to
/// unprivileged callers times fragment size, and `usage_percent` is clamped
/// to `[0, 100]`.
pub fn usage(root: impl AsRef<Path>) -> DiskUsage {
    let root = root.as_ref();
    let stat = match nix::sys::statvfs::statvfs(root) {
        Ok(stat) => stat,
        Err(err) => {
            log::warn!(
                "filesystem statistics query failed for `{}`: {}",
                root.display(),
                err
            );
            return DiskUsage::default();
        }
    };

    let fragment_size = stat.fragment_size() as u64;
    let total = (stat.blocks() as u64).saturating_mul(fragment_size);
    let free = (stat.blocks_available() as u64).saturating_mul(fragment_size);
    let used = total.saturating_sub(free);
    let usage_percent = if total > 0 {
        (used as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    DiskUsage {
        total,
        used,
        free,
        usage_percent,
    }
}
