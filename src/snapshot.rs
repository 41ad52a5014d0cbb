//! Snapshot model and single-shot collection.
//!
//! [`collect`] resolves every metric category once, independently, against
//! the candidate sources and substitutes local-process fallbacks wherever a
//! source is unreadable or fails to parse. The result is always a fully
//! populated document.

use serde::Serialize;

use crate::disk::{self, DiskUsage};
use crate::facts::{cpu, load, memory, net, os};
use crate::local::LocalFacts;
use crate::source::Sources;

/// Sentinel reported when no local address can be determined.
pub const IP_UNAVAILABLE: &str = "unavailable";

/// One complete, point-in-time resolution of every host metric.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub memory: MemorySnapshot,
    pub cpu: CpuSnapshot,
    pub disk: DiskUsage,
    pub os: OsSnapshot,
    pub uptime_secs: u64,
    pub hostname: String,
    pub local_ip: String,
    pub load_average: [f64; 3],
    pub host_mounted: bool,
}

/// Memory totals in bytes.
#[derive(Debug, Clone, Serialize)]
pub struct MemorySnapshot {
    pub total: u64,
    pub free: u64,
    pub available: u64,
    pub used: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CpuSnapshot {
    pub count: u64,
    pub usage_percent: f64,
    pub model: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OsSnapshot {
    pub os_type: String,
    pub release: String,
    pub arch: String,
}

/// Resolves a complete snapshot.
///
/// Each metric category is resolved independently; no category can fail the
/// snapshot, since every resolution ends in a usable value.
pub fn collect(sources: &Sources, local: &dyn LocalFacts) -> Snapshot {
    let host_mounted = sources.host_mounted();
    let cpuinfo = sources.read("proc/cpuinfo");

    let load_average = sources
        .read("proc/loadavg")
        .as_deref()
        .and_then(load::parse_load_average)
        .unwrap_or_else(|| local.load_average());
    let uptime_secs = sources
        .read("proc/uptime")
        .as_deref()
        .and_then(load::parse_uptime_secs)
        .unwrap_or_else(|| local.uptime_secs());

    Snapshot {
        memory: collect_memory(sources, local),
        cpu: collect_cpu(sources, cpuinfo.as_deref(), &load_average, local),
        disk: disk::usage(sources.fs_root()),
        os: collect_os(sources, cpuinfo.as_deref(), local),
        uptime_secs,
        hostname: collect_hostname(sources, local),
        local_ip: collect_local_ip(sources, local),
        load_average,
        host_mounted,
    }
}

fn collect_memory(sources: &Sources, local: &dyn LocalFacts) -> MemorySnapshot {
    let info = sources
        .read("proc/meminfo")
        .map(|content| memory::parse_meminfo(&content))
        .unwrap_or_default();

    let total = info.total.unwrap_or_else(|| local.memory_total());
    let available = info
        .available_or_free()
        .unwrap_or_else(|| local.memory_available());
    let free = info
        .free
        .or(info.available)
        .unwrap_or_else(|| local.memory_available());

    MemorySnapshot {
        total,
        free,
        available,
        used: total.saturating_sub(available),
    }
}

fn collect_cpu(
    sources: &Sources,
    cpuinfo: Option<&str>,
    load_average: &[f64; 3],
    local: &dyn LocalFacts,
) -> CpuSnapshot {
    let model = cpuinfo
        .and_then(cpu::parse_model)
        .or_else(|| local.cpu_model())
        .unwrap_or_else(|| "Unknown".to_owned());
    let count = cpuinfo
        .and_then(cpu::parse_count)
        .unwrap_or_else(|| local.cpu_count())
        .max(1);
    let usage_percent = sources
        .read("proc/stat")
        .as_deref()
        .and_then(cpu::parse_usage)
        .unwrap_or_else(|| (load_average[0] / count as f64 * 100.0).min(100.0));

    CpuSnapshot {
        count,
        usage_percent,
        model,
    }
}

fn collect_os(sources: &Sources, cpuinfo: Option<&str>, local: &dyn LocalFacts) -> OsSnapshot {
    let pretty = sources
        .read("etc/os-release")
        .as_deref()
        .and_then(os::parse_pretty_name);
    let kernel = sources
        .read("proc/version")
        .as_deref()
        .and_then(os::parse_kernel_release);
    let release = kernel
        .or(pretty)
        .or_else(|| local.os_release())
        .unwrap_or_else(|| "Unknown".to_owned());
    let arch = cpuinfo
        .and_then(os::parse_arch)
        .unwrap_or_else(|| local.arch())
        .to_owned();

    OsSnapshot {
        os_type: local.os_type().to_owned(),
        release,
        arch,
    }
}

fn collect_hostname(sources: &Sources, local: &dyn LocalFacts) -> String {
    sources
        .read_first(&["etc/hostname", "proc/sys/kernel/hostname"])
        .filter(|name| !net::is_container_id(name))
        .or_else(|| local.hostname())
        .unwrap_or_else(|| "Unknown".to_owned())
}

fn collect_local_ip(sources: &Sources, local: &dyn LocalFacts) -> String {
    sources
        .read("proc/net/route")
        .as_deref()
        .and_then(net::parse_default_gateway)
        .or_else(|| local.primary_ipv4())
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| IP_UNAVAILABLE.to_owned())
}
