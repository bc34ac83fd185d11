//! Token claims, key material, and the RS256 codec.

pub mod claims;
pub mod codec;
pub mod keys;

pub use claims::TokenClaims;
pub use codec::{IssuedToken, TokenCodec};
pub use keys::{KeyMaterial, TokenClass, TokenKeys};
