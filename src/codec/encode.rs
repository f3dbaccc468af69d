use crate::character_sets::{is_reserved, utf8_sequence_len};
use crate::compat::String;
use percent_encoding::percent_encode_byte;

/// Percent-encode reserved characters that `allowed` does not list.
///
/// Every other byte, including non-ASCII, is copied verbatim.
pub fn encode_reserved(input: &str, allowed: &str) -> String {
    let mut buffer = String::with_capacity(input.len());
    encode_reserved_into(&mut buffer, input, allowed);
    buffer
}

/// Write the reserved-character encoding of `input` into `buffer`
pub fn encode_reserved_into(buffer: &mut String, input: &str, allowed: &str) {
    let allowed = allowed.as_bytes();
    let mut start = 0;

    for (i, &b) in input.as_bytes().iter().enumerate() {
        if is_reserved(b) && !allowed.contains(&b) {
            // Reserved bytes are ASCII, so `i` is a char boundary
            buffer.push_str(&input[start..i]);
            buffer.push_str(percent_encode_byte(b));
            start = i + 1;
        }
    }

    buffer.push_str(&input[start..]);
}

/// Percent-encode every byte of each multi-byte UTF-8 sequence.
///
/// Sequence lengths come from the leading byte alone; continuation bytes
/// are not validated. ASCII passes through unchanged, so the output of
/// [`encode_reserved`] (whose `%` triplets are ASCII) is left intact.
pub fn encode_utf8(input: &str) -> String {
    let mut buffer = String::with_capacity(input.len());
    encode_utf8_into(&mut buffer, input);
    buffer
}

/// Write the UTF-8 percent-encoding of `input` into `buffer`
pub fn encode_utf8_into(buffer: &mut String, input: &str) {
    if input.is_ascii() {
        buffer.push_str(input);
        return;
    }

    let bytes = input.as_bytes();
    buffer.reserve(input.len() * 2);

    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let len = utf8_sequence_len(bytes[i]);
        if len > 1 {
            buffer.push_str(&input[start..i]);
            let end = (i + len).min(bytes.len());
            for &b in &bytes[i..end] {
                buffer.push_str(percent_encode_byte(b));
            }
            i = end;
            start = end;
        } else {
            i += 1;
        }
    }

    buffer.push_str(&input[start..]);
}

/// Reserved pass followed by the UTF-8 pass
pub fn encode(input: &str, allowed: &str) -> String {
    let reserved = encode_reserved(input, allowed);
    if reserved.is_ascii() {
        return reserved;
    }
    encode_utf8(&reserved)
}

/// Write `encode(input, allowed)` into `buffer`, skipping the UTF-8 pass
/// for IRIs so non-ASCII text is stored as-is.
pub fn encode_into(buffer: &mut String, input: &str, allowed: &str, iri: bool) {
    if iri {
        encode_reserved_into(buffer, input, allowed);
    } else {
        buffer.push_str(&encode(input, allowed));
    }
}
