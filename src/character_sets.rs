//! Per-field allow-lists and byte classification tables.

/// Nothing reserved passes through (scheme, port)
pub const NO_CHARS: &str = "";
/// Authority as a whole: credentials and location separators survive
pub const AUTH_CHARS: &str = "!$&'()*+,;:=@";
/// Path keeps its segment separator
pub const PATH_CHARS: &str = "!$&'()*+,;:=@/";
/// A single path segment
pub const PATH_SEGMENT_CHARS: &str = "!$&'()*+,;:=@";
pub const HOST_CHARS: &str = "!$&'()[]*+,;=";
/// Whole query string, including pair and key/value separators
pub const QUERY_CHARS: &str = ":@?/&;=";
/// A query key or value written by parameter edits
pub const QUERY_TOKEN_CHARS: &str = ":@?/";
pub const FRAG_CHARS: &str = ":@?/";
pub const USER_CHARS: &str = "!$&'()*+,;=";

/// Bytes the reserved pass encodes unless a field allows them
const RESERVED_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let reserved = b":@&=?#()[]'/+!*;$,% ";
    let mut i = 0;
    while i < reserved.len() {
        table[reserved[i] as usize] = true;
        i += 1;
    }
    table
};

/// Check if a byte belongs to the fixed reserved set
pub fn is_reserved(b: u8) -> bool {
    RESERVED_TABLE[b as usize]
}

/// Delimiters that end the scheme candidate: `: / @ ? #`
const SCHEME_DELIMITER_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b':' as usize] = true;
    table[b'/' as usize] = true;
    table[b'@' as usize] = true;
    table[b'?' as usize] = true;
    table[b'#' as usize] = true;
    table
};

/// Position of the first scheme delimiter, or the input length
pub fn find_scheme_delimiter(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|&b| SCHEME_DELIMITER_TABLE[b as usize])
        .unwrap_or(bytes.len())
}

/// Length of the UTF-8 sequence introduced by a leading byte.
///
/// Covers the historical 5 and 6 byte forms. Continuation bytes and
/// `0xFE`/`0xFF` classify as 0 and are treated as single bytes.
pub fn utf8_sequence_len(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        0xF8..=0xFB => 5,
        0xFC..=0xFD => 6,
        _ => 0,
    }
}
