//! Parser for memory-total text in the `<label>: <integer> kB` format.
//!
//! Only the three totals the snapshot needs are extracted: `MemTotal`,
//! `MemFree`, and `MemAvailable`. Values are converted from kilobytes to
//! bytes. `MemAvailable` reflects reclaimable cache and is preferred over
//! `MemFree` when both exist; [`MemInfo::available_or_free`] encodes that
//! preference. Unknown labels and malformed values are ignored.
//!
//! # Examples
//!
//! ```rust
//! use hostfacts::facts::memory;
//!
//! let info = memory::parse_meminfo("MemTotal: 1024 kB\nMemFree: 512 kB\n");
//! assert_eq!(info.total, Some(1_048_576));
//! assert_eq!(info.available_or_free(), Some(524_288));
//! ```

/// Memory totals extracted from a meminfo document, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemInfo {
    pub total: Option<u64>,
    pub free: Option<u64>,
    pub available: Option<u64>,
}

impl MemInfo {
    /// Available memory, preferring `MemAvailable` over `MemFree`.
    pub fn available_or_free(&self) -> Option<u64> {
        self.available.or(self.free)
    }
}

/// Parses meminfo-style text into [`MemInfo`].
///
/// Lines that do not carry one of the known labels, or whose value does not
/// parse, leave the corresponding field unset.
pub fn parse_meminfo(meminfo: &str) -> MemInfo {
    let mut info = MemInfo::default();
    for line in meminfo.lines() {
        let Some((label, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = match label.trim() {
            "MemTotal" => &mut info.total,
            "MemFree" => &mut info.free,
            "MemAvailable" => &mut info.available,
            _ => continue,
        };
        *slot = parse_kib(rest);
    }
    info
}

/// Parses `<integer> kB` into bytes.
fn parse_kib(value: &str) -> Option<u64> {
    let qty = value.split_whitespace().next()?;
    let kib = qty.parse::<u64>().ok()?;
    Some(kib.saturating_mul(1024))
}
