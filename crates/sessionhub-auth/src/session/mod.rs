//! Session issuance: login, refresh, registration, logout.

pub mod cookie;
pub mod issuer;

pub use cookie::{CookiePolicy, SessionCookie};
pub use issuer::{Credential, SessionIssuer, TokenPair, normalize_identifier};
