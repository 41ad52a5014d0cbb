//! Parsers for the load-average and uptime files.

/// Parses the first three floats of load-average text as the 1/5/15 minute
/// averages.
pub fn parse_load_average(loadavg: &str) -> Option<[f64; 3]> {
    let mut parts = loadavg.split_whitespace();
    let one = parts.next()?.parse().ok()?;
    let five = parts.next()?.parse().ok()?;
    let fifteen = parts.next()?.parse().ok()?;
    Some([one, five, fifteen])
}

/// Parses the leading float of uptime text into whole seconds.
pub fn parse_uptime_secs(uptime: &str) -> Option<u64> {
    let secs: f64 = uptime.split_whitespace().next()?.parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some(secs as u64)
}
