mod authority;
mod query;
mod uri_scanner;

pub use authority::{AuthorityParts, scan_authority};
pub use query::{QueryScanner, Token, next_token};
pub use uri_scanner::{UriParts, split};
