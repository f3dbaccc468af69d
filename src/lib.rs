#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;
mod log;

// Internal modules (not public API)
mod buffer;
mod checkers;
mod error;
mod options;
mod parser;
mod types;
mod uri;
mod uri_base;

pub mod character_sets;
pub mod codec;

// Public API
pub use buffer::FieldBuf;
pub use error::{Result, UriError};
pub use options::{Limits, Options};
pub use parser::{AuthorityParts, QueryScanner, Token, UriParts, next_token, scan_authority, split};
pub use types::Field;
pub use uri::Uri;
pub use uri_base::UriBase;
