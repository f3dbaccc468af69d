use crate::types::Field;

/// Per-field capacities in bytes, measured on the encoded value.
///
/// The authority capacity is derived: enough for every sub-field plus the
/// three separators (`:`, `@`, `:`), so rebuilding `auth` from sub-fields
/// that fit always fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub scheme: usize,
    pub usr: usize,
    pub pwd: usize,
    pub host: usize,
    pub port: usize,
    pub path: usize,
    pub query: usize,
    pub frag: usize,
}

impl Limits {
    pub const fn new() -> Self {
        Self {
            scheme: 32,
            usr: 128,
            pwd: 128,
            host: 512,
            port: 8,
            path: 2048,
            query: 2048,
            frag: 128,
        }
    }

    /// Capacity of a field
    pub const fn capacity(&self, field: Field) -> usize {
        match field {
            Field::Scheme => self.scheme,
            Field::Auth => 3usize
                .saturating_add(self.usr)
                .saturating_add(self.pwd)
                .saturating_add(self.host)
                .saturating_add(self.port),
            Field::Usr => self.usr,
            Field::Pwd => self.pwd,
            Field::Host => self.host,
            Field::Port => self.port,
            Field::Path => self.path,
            Field::Query => self.query,
            Field::Frag => self.frag,
        }
    }

    /// Set the capacity of a field. `Field::Auth` is derived from the
    /// sub-field capacities and is left unchanged.
    #[must_use]
    pub const fn with(mut self, field: Field, capacity: usize) -> Self {
        match field {
            Field::Scheme => self.scheme = capacity,
            Field::Auth => {}
            Field::Usr => self.usr = capacity,
            Field::Pwd => self.pwd = capacity,
            Field::Host => self.host = capacity,
            Field::Port => self.port = capacity,
            Field::Path => self.path = capacity,
            Field::Query => self.query = capacity,
            Field::Frag => self.frag = capacity,
        }
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction options for a [`Uri`](crate::Uri)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub limits: Limits,
    /// Store non-ASCII text as UTF-8 instead of percent-encoding it
    pub iri: bool,
}

impl Options {
    /// Default limits with IRI mode enabled
    pub const fn iri() -> Self {
        Self {
            limits: Limits::new(),
            iri: true,
        }
    }

    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.capacity(Field::Scheme), 32);
        assert_eq!(limits.capacity(Field::Path), 2048);
        assert_eq!(limits.capacity(Field::Port), 8);
        assert_eq!(limits.capacity(Field::Auth), 3 + 128 + 128 + 512 + 8);
    }

    #[test]
    fn test_with_capacity() {
        let limits = Limits::new().with(Field::Host, 16).with(Field::Auth, 1);
        assert_eq!(limits.capacity(Field::Host), 16);
        assert_eq!(limits.capacity(Field::Auth), 3 + 128 + 128 + 16 + 8);
    }

    #[test]
    fn test_options() {
        assert!(!Options::default().iri);
        assert!(Options::iri().iri);
        let options = Options::default().with_limits(Limits::new().with(Field::Query, 10));
        assert_eq!(options.limits.query, 10);
    }
}
