//! Parsers for OS identity: release name, kernel version, architecture.

/// Kernel version strings carrying this marker come from a minimal VM-init
/// kernel (Docker Desktop's VM) and do not describe the real host OS.
const VM_INIT_MARKER: &str = "linuxkit";

/// Extracts the `PRETTY_NAME` value from os-release-style text.
pub fn parse_pretty_name(os_release: &str) -> Option<String> {
    for line in os_release.lines() {
        if let Some(value) = line.trim().strip_prefix("PRETTY_NAME=") {
            let value = value.trim().trim_matches('"');
            if !value.is_empty() {
                return Some(value.to_owned());
            }
        }
    }
    None
}

/// Extracts the release token following `Linux version ` from kernel
/// version text.
///
/// # Returns
///
/// * `Some(token)` for a trusted kernel version string.
/// * `None` when the pattern is absent or the content carries the
///   minimal-VM marker.
pub fn parse_kernel_release(version: &str) -> Option<String> {
    if version.to_ascii_lowercase().contains(VM_INIT_MARKER) {
        return None;
    }
    let idx = version.find("Linux version ")?;
    let token = version[idx + "Linux version ".len()..]
        .split_whitespace()
        .next()?;
    Some(token.to_owned())
}

/// Derives the machine architecture from CPU identity text.
///
/// The `lm` flag (long mode) or an `x86_64` mention identifies x86-64; an
/// `aarch64` mention or the ARM-specific `CPU implementer` field identifies
/// 64-bit ARM.
pub fn parse_arch(cpuinfo: &str) -> Option<&'static str> {
    for line in cpuinfo.lines() {
        let line = line.trim();
        if has_flag_label(line) && line.split_whitespace().any(|tok| tok == "lm") {
            return Some("x86_64");
        }
    }
    if cpuinfo.contains("x86_64") {
        return Some("x86_64");
    }
    let lower = cpuinfo.to_ascii_lowercase();
    if lower.contains("aarch64") {
        return Some("aarch64");
    }
    if lower.lines().any(|l| l.trim().starts_with("cpu implementer")) {
        return Some("aarch64");
    }
    None
}

/// Returns true for the per-core flag list line (`flags` on x86,
/// `Features` on ARM).
fn has_flag_label(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.starts_with("flags") || lower.starts_with("features")
}
