use crate::character_sets::is_reserved;
use crate::compat::{Cow, String, Vec};
use percent_encoding::percent_decode;

/// Decode `%XX` triplets and `+` (as space) into raw octets.
///
/// A `%` not followed by two hex digits is copied through unchanged.
pub fn decode_bytes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut start = 0;

    for plus in memchr::memchr_iter(b'+', input) {
        out.extend(percent_decode(&input[start..plus]));
        out.push(b' ');
        start = plus + 1;
    }
    out.extend(percent_decode(&input[start..]));

    out
}

/// Decode a percent-encoded string.
///
/// Octets that do not form valid UTF-8 are replaced with U+FFFD; use
/// [`decode_bytes`] when the raw octets are needed. Input without `%` or
/// `+` is returned borrowed.
pub fn decode(input: &str) -> Cow<'_, str> {
    if memchr::memchr2(b'%', b'+', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(into_text(decode_bytes(input.as_bytes())))
}

/// Decode only the `%XX` triplets whose octet is not reserved.
///
/// Structural separators (`%2F`, `%26`, `%3D`, ...) stay encoded and `+` is
/// kept literal, so the result still parses the same way as the input.
pub fn decode_unreserved(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    if memchr::memchr(b'%', bytes).is_none() {
        return Cow::Borrowed(input);
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while let Some(pos) = memchr::memchr(b'%', &bytes[i..]) {
        let pct = i + pos;
        out.extend_from_slice(&bytes[i..pct]);
        match hex_pair(&bytes[pct + 1..]) {
            Some(b) if !is_reserved(b) => {
                out.push(b);
                i = pct + 3;
            }
            _ => {
                out.push(b'%');
                i = pct + 1;
            }
        }
    }
    out.extend_from_slice(&bytes[i..]);

    Cow::Owned(into_text(out))
}

fn into_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn hex_pair(bytes: &[u8]) -> Option<u8> {
    match bytes {
        [hi, lo, ..] => Some((hex_value(*hi)? << 4) | hex_value(*lo)?),
        _ => None,
    }
}
