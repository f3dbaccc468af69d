use crate::compat::String;
use crate::error::{Result, UriError};
use crate::log::warning;
use crate::types::Field;

/// Allocation granularity of field buffers
pub const CHUNK: usize = 32;

/// Bytes to allocate for a value of `len` bytes: the next chunk multiple
/// with room to spare.
pub const fn chunked(len: usize) -> usize {
    CHUNK * ((len + 1) / CHUNK + 1)
}

/// Owned storage for one field with a fixed maximum length.
///
/// Allocates lazily in multiples of [`CHUNK`] and never shrinks on write.
/// A value longer than the capacity is rejected and the buffer keeps its
/// previous contents.
#[derive(Debug, Clone)]
pub struct FieldBuf {
    field: Field,
    capacity: usize,
    value: String,
}

impl FieldBuf {
    pub fn new(field: Field, capacity: usize) -> Self {
        Self {
            field,
            capacity,
            value: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Maximum length in bytes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes currently allocated
    pub fn allocated(&self) -> usize {
        self.value.capacity()
    }

    /// Fail unless a value of `len` bytes fits
    pub fn check(&self, len: usize) -> Result<()> {
        if len > self.capacity {
            warning!(
                "rejecting {len} bytes for {} (capacity {})",
                self.field,
                self.capacity
            );
            return Err(UriError::CapacityExceeded {
                field: self.field,
                capacity: self.capacity,
                length: len,
            });
        }
        Ok(())
    }

    /// Replace the contents with `value`
    ///
    /// # Errors
    ///
    /// Returns [`UriError::CapacityExceeded`] if `value` is longer than the
    /// capacity.
    pub fn set(&mut self, value: &str) -> Result<()> {
        self.check(value.len())?;

        self.value.clear();
        let allocate = chunked(value.len());
        if allocate > self.value.capacity() {
            self.value.reserve_exact(allocate);
        }
        self.value.push_str(value);
        Ok(())
    }

    /// Empty the buffer, keeping its allocation
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

impl PartialEq for FieldBuf {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.value == other.value
    }
}

impl Eq for FieldBuf {}
