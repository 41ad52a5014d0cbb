//! The resolving process's own view of the machine.
//!
//! Every metric resolution falls back to this view when no host-level
//! source can be read, so a snapshot is always fully populated.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;

use sysinfo::{Networks, System};

/// OS-level facts about the process's own environment.
///
/// Injectable so snapshot assembly can be tested deterministically without
/// touching the real machine.
pub trait LocalFacts: Send + Sync {
    /// Logical CPU count.
    fn cpu_count(&self) -> u64;
    /// CPU model string, if the platform reports one.
    fn cpu_model(&self) -> Option<String>;
    /// Total memory in bytes.
    fn memory_total(&self) -> u64;
    /// Available memory in bytes.
    fn memory_available(&self) -> u64;
    fn hostname(&self) -> Option<String>;
    fn os_type(&self) -> &'static str;
    fn arch(&self) -> &'static str;
    fn os_release(&self) -> Option<String>;
    fn uptime_secs(&self) -> u64;
    /// 1/5/15 minute load averages.
    fn load_average(&self) -> [f64; 3];
    /// First non-internal IPv4 address among the process's own interfaces.
    fn primary_ipv4(&self) -> Option<Ipv4Addr>;
}

/// Production [`LocalFacts`] implementation backed by `sysinfo`.
pub struct SysinfoFacts {
    sys: Mutex<System>,
}

impl SysinfoFacts {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
        }
    }
}

impl Default for SysinfoFacts {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalFacts for SysinfoFacts {
    fn cpu_count(&self) -> u64 {
        self.sys
            .lock()
            .map(|sys| sys.cpus().len() as u64)
            .unwrap_or(0)
    }

    fn cpu_model(&self) -> Option<String> {
        let sys = self.sys.lock().ok()?;
        sys.cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_owned())
            .filter(|brand| !brand.is_empty())
    }

    fn memory_total(&self) -> u64 {
        match self.sys.lock() {
            Ok(mut sys) => {
                sys.refresh_memory();
                sys.total_memory()
            }
            Err(_) => 0,
        }
    }

    fn memory_available(&self) -> u64 {
        match self.sys.lock() {
            Ok(mut sys) => {
                sys.refresh_memory();
                sys.available_memory()
            }
            Err(_) => 0,
        }
    }

    fn hostname(&self) -> Option<String> {
        System::host_name()
    }

    fn os_type(&self) -> &'static str {
        std::env::consts::OS
    }

    fn arch(&self) -> &'static str {
        std::env::consts::ARCH
    }

    fn os_release(&self) -> Option<String> {
        System::kernel_version().or_else(System::os_version)
    }

    fn uptime_secs(&self) -> u64 {
        System::uptime()
    }

    fn load_average(&self) -> [f64; 3] {
        let load = System::load_average();
        [load.one, load.five, load.fifteen]
    }

    fn primary_ipv4(&self) -> Option<Ipv4Addr> {
        let networks = Networks::new_with_refreshed_list();
        for (_name, data) in networks.list() {
            for network in data.ip_networks() {
                if let IpAddr::V4(addr) = network.addr
                    && !addr.is_loopback()
                    && !addr.is_link_local()
                {
                    return Some(addr);
                }
            }
        }
        None
    }
}
