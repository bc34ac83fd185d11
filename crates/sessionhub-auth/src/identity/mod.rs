//! Request credential extraction and access token resolution.

pub mod credential;
pub mod resolver;

pub use credential::{
    ACCESS_TOKEN_COOKIE, LOGGED_IN_COOKIE, REFRESH_TOKEN_COOKIE, extract_credential,
};
pub use resolver::IdentityResolver;
