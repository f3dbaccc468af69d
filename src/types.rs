use crate::character_sets::{
    AUTH_CHARS, FRAG_CHARS, HOST_CHARS, NO_CHARS, PATH_CHARS, QUERY_CHARS, USER_CHARS,
};
use crate::compat::ToString;
use crate::error::UriError;

/// Components stored by a [`Uri`](crate::Uri) record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Scheme,
    Auth,
    Usr,
    Pwd,
    Host,
    Port,
    Path,
    Query,
    Frag,
}

impl Field {
    /// Every field, in serialization order
    pub const ALL: [Field; 9] = [
        Self::Scheme,
        Self::Auth,
        Self::Usr,
        Self::Pwd,
        Self::Host,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Frag,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Auth => "auth",
            Self::Usr => "usr",
            Self::Pwd => "pwd",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Frag => "frag",
        }
    }

    /// Reserved characters this field stores unencoded
    pub const fn allowed(self) -> &'static str {
        match self {
            Self::Scheme | Self::Port => NO_CHARS,
            Self::Usr | Self::Pwd => USER_CHARS,
            Self::Host => HOST_CHARS,
            Self::Auth => AUTH_CHARS,
            Self::Path => PATH_CHARS,
            Self::Query => QUERY_CHARS,
            Self::Frag => FRAG_CHARS,
        }
    }

    /// Compound fields carry their own structure (separators), so their
    /// decoded form keeps reserved characters encoded.
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::Auth | Self::Path | Self::Query)
    }

    /// Sub-fields of the authority, rebuilt into `auth` when set
    pub const fn is_auth_part(self) -> bool {
        matches!(self, Self::Usr | Self::Pwd | Self::Host | Self::Port)
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Field {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UriError::UnknownField(s.to_string()))
    }
}
