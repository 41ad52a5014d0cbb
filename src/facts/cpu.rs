//! Parsers for the CPU identity file and the aggregate CPU time counters.
//!
//! The identity file varies widely between architectures: x86 layouts carry
//! a `model name` field, while ARM and embedded layouts use `Hardware`,
//! `Processor`, or only `CPU implementer`. The parsers here accept the
//! known label spellings in order of preference and extract the value after
//! the first `:` or `=` separator.
//!
//! The utilization figure is computed from a single read of the cumulative
//! time counters. Because the counters accumulate since boot, the result is
//! the busy share of the whole uptime, not of a recent window; a true
//! recent-window rate needs two samples with a delay and a counter
//! difference between them.
//!
//! # Examples
//!
//! ```rust
//! use hostfacts::facts::cpu;
//!
//! let cpuinfo = "\
//! processor\t: 0
//! model name\t: Intel(R) Celeron(R) J4125 CPU @ 2.00GHz
//! ";
//! assert_eq!(
//!     cpu::parse_model(cpuinfo).as_deref(),
//!     Some("Intel(R) Celeron(R) J4125 CPU @ 2.00GHz")
//! );
//! assert_eq!(cpu::parse_count(cpuinfo), Some(1));
//! ```

/// Model-name labels accepted in the identity file, in order of preference.
/// The later entries cover ARM layouts that carry no `model name` field.
const MODEL_LABELS: [&str; 5] = [
    "model name",
    "hardware",
    "cpu model",
    "processor",
    "cpu implementer",
];

/// Extracts the CPU model string from identity-file text.
///
/// Labels are matched case-insensitively in the order of [`MODEL_LABELS`];
/// the value is the text after the first `:` or `=`, or the whole trimmed
/// line when no separator exists. Purely numeric values are skipped, since
/// those are per-core index entries rather than names.
///
/// # Returns
///
/// * `Some(model)` for the first usable label match.
/// * `None` when no label yields a value.
pub fn parse_model(cpuinfo: &str) -> Option<String> {
    for label in MODEL_LABELS {
        for line in cpuinfo.lines() {
            let Some(rest) = strip_label(line, label) else {
                continue;
            };
            let value = match rest.find([':', '=']) {
                Some(idx) if rest[..idx].trim().is_empty() => rest[idx + 1..].trim(),
                // the label was only a prefix of a longer word
                Some(_) => continue,
                None => line.trim(),
            };
            if value.is_empty() || value.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            return Some(value.to_owned());
        }
    }
    None
}

/// Counts logical CPUs in identity-file text.
///
/// Counts lines that begin with `processor` followed by a separator or a
/// numeric index. When no such line exists, falls back to the leading
/// integer of a `CPU(s):` summary line.
///
/// # Returns
///
/// * `Some(count)` when either counting strategy succeeds.
/// * `None` when the text carries no processor information at all.
pub fn parse_count(cpuinfo: &str) -> Option<u64> {
    let entries = cpuinfo.lines().filter(|l| is_processor_entry(l)).count() as u64;
    if entries > 0 {
        return Some(entries);
    }

    cpuinfo.lines().find_map(|line| {
        let rest = strip_label(line, "cpu(s)")?;
        let value = rest.trim_start();
        let value = value.strip_prefix([':', '=']).unwrap_or(value).trim_start();
        let end = value
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(value.len());
        value[..end].parse::<u64>().ok()
    })
}

/// Computes the busy percentage from aggregate CPU counter text.
///
/// Looks for the summary line whose first token is exactly `cpu` and reads
/// up to eight positional counters (user, nice, system, idle, iowait, irq,
/// softirq, steal); absent trailing fields default to 0. The result is
/// `busy / (busy + idle)` over the cumulative counters, clamped to
/// `[0, 100]`.
///
/// # Returns
///
/// * `Some(percent)` when the summary line parses and the counters are
///   non-zero.
/// * `None` when the line is absent, malformed, or all counters are zero.
pub fn parse_usage(stat: &str) -> Option<f64> {
    let line = stat
        .lines()
        .find(|l| l.split_whitespace().next() == Some("cpu"))?;

    let mut counters = [0u64; 8];
    for (slot, token) in counters.iter_mut().zip(line.split_whitespace().skip(1)) {
        *slot = token.parse().ok()?;
    }

    let [user, nice, system, idle, iowait, irq, softirq, steal] = counters;
    let busy = user + nice + system + irq + softirq + steal;
    let idle_total = idle + iowait;
    let total = busy + idle_total;
    if total == 0 {
        return None;
    }

    Some((busy as f64 / total as f64 * 100.0).clamp(0.0, 100.0))
}

/// Case-insensitively strips an ASCII label prefix from a trimmed line.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let line = line.trim();
    if line.len() < label.len() {
        return None;
    }
    if !line.as_bytes()[..label.len()].eq_ignore_ascii_case(label.as_bytes()) {
        return None;
    }
    Some(&line[label.len()..])
}

/// Returns true for per-core entry lines: `processor` followed by a
/// separator or a numeric index.
fn is_processor_entry(line: &str) -> bool {
    let Some(rest) = strip_label(line, "processor") else {
        return false;
    };
    match rest.trim_start().chars().next() {
        Some(':') | Some('=') => true,
        Some(c) => c.is_ascii_digit(),
        None => false,
    }
}
