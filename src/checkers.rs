/// Check if a port string holds only ASCII digits.
/// An empty port means "no port" and passes.
pub fn is_port(port: &str) -> bool {
    port.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !is_port(port) {
        return None;
    }
    port.parse::<u16>().ok()
}
