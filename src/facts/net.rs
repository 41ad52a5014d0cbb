//! Parsers for the kernel route table and the container-hostname heuristic.

use std::net::Ipv4Addr;

/// Decodes the default gateway from kernel route-table text.
///
/// Each data line carries whitespace-separated fields; a destination field
/// (field 2) of `00000000` marks the default route, and the gateway field
/// (field 3) holds the address as eight hex digits in little-endian byte
/// order. Lines that do not parse are skipped.
///
/// # Examples
///
/// ```rust
/// use std::net::Ipv4Addr;
/// use hostfacts::facts::net;
///
/// let route = "eth0\t00000000\t0202000A\t0003\t0\t0\t0\t00000000\t0\t0\t0\n";
/// assert_eq!(
///     net::parse_default_gateway(route),
///     Some(Ipv4Addr::new(10, 0, 2, 2))
/// );
/// ```
pub fn parse_default_gateway(route: &str) -> Option<Ipv4Addr> {
    for line in route.lines() {
        let mut fields = line.split_whitespace();
        let _iface = fields.next();
        let destination = fields.next();
        let gateway = fields.next();
        if destination != Some("00000000") {
            continue;
        }
        if let Some(addr) = gateway.and_then(decode_le_hex_ipv4) {
            return Some(addr);
        }
    }
    None
}

/// Decodes an 8-hex-digit little-endian IPv4 address.
fn decode_le_hex_ipv4(hex: &str) -> Option<Ipv4Addr> {
    if hex.len() != 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Ipv4Addr::new(
        byte(6..8)?,
        byte(4..6)?,
        byte(2..4)?,
        byte(0..2)?,
    ))
}

/// Returns true if the hostname looks like a container-generated ID
/// (12 hex characters) rather than a genuine host name.
pub fn is_container_id(hostname: &str) -> bool {
    hostname.len() == 12 && is_non_empty_hex_string(hostname)
}

/// Returns true if the input string is not empty and contains only ASCII
/// hex digits.
fn is_non_empty_hex_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gateway_with_header() {
        let data = "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
eth0\t00000000\t0202000A\t0003\t0\t0\t0\t00000000\t0\t0\t0
eth0\t0002000A\t00000000\t0001\t0\t0\t0\t00FFFFFF\t0\t0\t0
";
        assert_eq!(
            parse_default_gateway(data),
            Some(Ipv4Addr::new(10, 0, 2, 2))
        );
    }

    #[test]
    fn test_gateway_byte_order() {
        let data = "eth0\t00000000\t0101A8C0\t0003\n";
        assert_eq!(
            parse_default_gateway(data),
            Some(Ipv4Addr::new(192, 168, 1, 1))
        );
    }

    #[test]
    fn test_no_default_route() {
        let data = "eth0\t0002000A\t00000000\t0001\t0\t0\t0\t00FFFFFF\t0\t0\t0\n";
        assert_eq!(parse_default_gateway(data), None);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let data = "\
garbage
eth0\t00000000\tZZZZZZZZ\t0003
eth0\t00000000\t0202000A\t0003
";
        assert_eq!(
            parse_default_gateway(data),
            Some(Ipv4Addr::new(10, 0, 2, 2))
        );
    }

    #[test]
    fn test_empty_route_table() {
        assert_eq!(parse_default_gateway(""), None);
    }

    #[test]
    fn test_container_id_detection() {
        assert!(is_container_id("a1b2c3d4e5f6"));
        assert!(is_container_id("A1B2C3D4E5F6"));
    }

    #[test]
    fn test_genuine_hostnames_pass() {
        assert!(!is_container_id("my-server"));
        // hex but not 12 characters
        assert!(!is_container_id("a1b2c3d4e5f"));
        assert!(!is_container_id("a1b2c3d4e5f67"));
        // 12 characters but not hex
        assert!(!is_container_id("a1b2c3d4e5g6"));
        assert!(!is_container_id(""));
    }
}
