use crate::compat::String;
use crate::types::Field;

/// Errors surfaced by record operations.
///
/// Scanning and decoding never fail; malformed input degrades to a
/// best-effort copy. Only writes that cannot be stored and misuse of the
/// by-name field interface are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The encoded value does not fit the field's capacity
    CapacityExceeded {
        field: Field,
        capacity: usize,
        length: usize,
    },
    /// A port value contained something other than ASCII digits
    InvalidPort,
    /// A field name did not match any field of the record
    UnknownField(String),
}

impl core::fmt::Display for UriError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CapacityExceeded {
                field,
                capacity,
                length,
            } => write!(
                f,
                "Value for {field} is {length} bytes encoded, capacity is {capacity}"
            ),
            Self::InvalidPort => f.write_str("Invalid port"),
            Self::UnknownField(name) => write!(f, "Unknown field: {name}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UriError {}

/// Result type for URI operations
pub type Result<T> = core::result::Result<T, UriError>;
