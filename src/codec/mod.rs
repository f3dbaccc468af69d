//! Percent-encoding codec.
//!
//! Encoding runs in two passes: reserved characters not allowed by the
//! target field become `%XX`, then every byte of each multi-byte UTF-8
//! sequence is encoded. Decoding is lenient and never fails.
//!
//! `decode(encode(s, allowed)) == s` whenever `allowed` does not contain
//! `+`. A literal `+` always decodes to a space, as does `%20`.

mod decode;
mod encode;

pub use decode::{decode, decode_bytes, decode_unreserved};
pub use encode::{
    encode, encode_into, encode_reserved, encode_reserved_into, encode_utf8, encode_utf8_into,
};
