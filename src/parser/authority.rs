use crate::checkers::is_port;
use crate::log::debug;

/// Sub-fields of an authority component.
///
/// Scanning with [`scan_authority`] and rebuilding through [`Display`]
/// are inverses: `scan_authority(&parts.to_string()) == parts` whenever
/// the parts contain no unencoded `@` or `:` of their own and the port is
/// numeric.
///
/// [`Display`]: core::fmt::Display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthorityParts<'a> {
    pub usr: &'a str,
    pub pwd: &'a str,
    pub host: &'a str,
    pub port: &'a str,
}

/// Split `usr:pwd@host:port` into its sub-fields.
///
/// Credentials end at the first `@` and split at their first `:`. The
/// location splits at its first `:`. A port that is not all digits is
/// dropped.
pub fn scan_authority(auth: &str) -> AuthorityParts<'_> {
    let mut parts = AuthorityParts::default();

    let location = match memchr::memchr(b'@', auth.as_bytes()) {
        Some(at) => {
            let credentials = &auth[..at];
            match memchr::memchr(b':', credentials.as_bytes()) {
                Some(colon) => {
                    parts.usr = &credentials[..colon];
                    parts.pwd = &credentials[colon + 1..];
                }
                None => parts.usr = credentials,
            }
            &auth[at + 1..]
        }
        None => auth,
    };

    match memchr::memchr(b':', location.as_bytes()) {
        Some(colon) => {
            parts.host = &location[..colon];
            let port = &location[colon + 1..];
            if is_port(port) {
                parts.port = port;
            } else {
                debug!("dropping non-numeric port {port:?}");
            }
        }
        None => parts.host = location,
    }

    parts
}

impl AuthorityParts<'_> {
    pub fn is_empty(&self) -> bool {
        self.usr.is_empty() && self.pwd.is_empty() && self.host.is_empty() && self.port.is_empty()
    }

    /// Byte length of the rebuilt authority
    pub fn len(&self) -> usize {
        let mut len = 0;
        if !self.usr.is_empty() || !self.pwd.is_empty() {
            len += self.usr.len() + 1;
            if !self.pwd.is_empty() {
                len += self.pwd.len() + 1;
            }
        }
        len += self.host.len();
        if !self.port.is_empty() {
            len += self.port.len() + 1;
        }
        len
    }
}

impl core::fmt::Display for AuthorityParts<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !self.usr.is_empty() || !self.pwd.is_empty() {
            f.write_str(self.usr)?;
            if !self.pwd.is_empty() {
                write!(f, ":{}", self.pwd)?;
            }
            f.write_str("@")?;
        }
        f.write_str(self.host)?;
        if !self.port.is_empty() {
            write!(f, ":{}", self.port)?;
        }
        Ok(())
    }
}
