use crate::error::Result;
use crate::types::Field;

/// Named accessors over a field-addressed URI record.
///
/// Implementors provide [`UriBase::raw_field`] and [`UriBase::set_field`];
/// every named getter and setter is derived from those two.
pub trait UriBase {
    /// Get the stored (percent-encoded) value of a field
    fn raw_field(&self, field: Field) -> &str;

    /// Encode and store a field, returning the stored value
    fn set_field(&mut self, field: Field, value: &str) -> Result<&str>;

    // Getters

    fn scheme(&self) -> &str {
        self.raw_field(Field::Scheme)
    }

    /// Get the authority (`usr:pwd@host:port`)
    fn auth(&self) -> &str {
        self.raw_field(Field::Auth)
    }

    fn usr(&self) -> &str {
        self.raw_field(Field::Usr)
    }

    fn pwd(&self) -> &str {
        self.raw_field(Field::Pwd)
    }

    fn host(&self) -> &str {
        self.raw_field(Field::Host)
    }

    /// Get the port as text, empty if absent
    fn port(&self) -> &str {
        self.raw_field(Field::Port)
    }

    fn path(&self) -> &str {
        self.raw_field(Field::Path)
    }

    /// Get the query, without the leading `?`
    fn query(&self) -> &str {
        self.raw_field(Field::Query)
    }

    /// Get the fragment, without the leading `#`
    fn frag(&self) -> &str {
        self.raw_field(Field::Frag)
    }

    // Has checks

    /// Check if a username or password is set
    fn has_credentials(&self) -> bool {
        !self.usr().is_empty() || !self.pwd().is_empty()
    }

    fn has_port(&self) -> bool {
        !self.port().is_empty()
    }

    // Setters

    fn set_scheme(&mut self, scheme: &str) -> Result<&str> {
        self.set_field(Field::Scheme, scheme)
    }

    /// Set the authority and re-scan its parts
    fn set_auth(&mut self, auth: &str) -> Result<&str> {
        self.set_field(Field::Auth, auth)
    }

    fn set_usr(&mut self, usr: &str) -> Result<&str> {
        self.set_field(Field::Usr, usr)
    }

    fn set_pwd(&mut self, pwd: &str) -> Result<&str> {
        self.set_field(Field::Pwd, pwd)
    }

    fn set_host(&mut self, host: &str) -> Result<&str> {
        self.set_field(Field::Host, host)
    }

    /// Set the port; must be all digits or empty
    fn set_port(&mut self, port: &str) -> Result<&str> {
        self.set_field(Field::Port, port)
    }

    fn set_path(&mut self, path: &str) -> Result<&str> {
        self.set_field(Field::Path, path)
    }

    fn set_query(&mut self, query: &str) -> Result<&str> {
        self.set_field(Field::Query, query)
    }

    fn set_frag(&mut self, frag: &str) -> Result<&str> {
        self.set_field(Field::Frag, frag)
    }
}

impl UriBase for crate::Uri {
    fn raw_field(&self, field: Field) -> &str {
        self.raw(field)
    }

    fn set_field(&mut self, field: Field, value: &str) -> Result<&str> {
        self.set(field, value)
    }
}
