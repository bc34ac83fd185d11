//! Shared fixtures for unit tests.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use sessionhub_core::config::{AuthConfig, PasswordHashConfig};
use sessionhub_database::MemoryIdentityStore;

use crate::UserStore;
use crate::identity::IdentityResolver;
use crate::jwt::{KeyMaterial, TokenCodec};
use crate::password::PasswordHasher;
use crate::session::SessionIssuer;

pub const ACCESS_PRIVATE: &str = include_str!("../../../tests/fixtures/keys/access_private.pem");
pub const ACCESS_PUBLIC: &str = include_str!("../../../tests/fixtures/keys/access_public.pem");
pub const REFRESH_PRIVATE: &str = include_str!("../../../tests/fixtures/keys/refresh_private.pem");
pub const REFRESH_PUBLIC: &str = include_str!("../../../tests/fixtures/keys/refresh_public.pem");

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        access_token_private_key: STANDARD.encode(ACCESS_PRIVATE),
        access_token_public_key: STANDARD.encode(ACCESS_PUBLIC),
        refresh_token_private_key: STANDARD.encode(REFRESH_PRIVATE),
        refresh_token_public_key: STANDARD.encode(REFRESH_PUBLIC),
        access_token_ttl_minutes: 15,
        access_token_max_age_minutes: 15,
        refresh_token_ttl_minutes: 60,
        refresh_token_max_age_minutes: 60,
        cookie_domain: None,
        cookie_secure: false,
        password_min_length: 8,
        password: PasswordHashConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
    }
}

pub struct Harness {
    pub keys: Arc<KeyMaterial>,
    pub store: Arc<MemoryIdentityStore>,
    pub issuer: SessionIssuer,
    pub resolver: IdentityResolver,
}

pub fn harness_with(config: AuthConfig) -> Harness {
    let keys = Arc::new(KeyMaterial::from_config(&config).unwrap());
    let hasher = Arc::new(PasswordHasher::new(&config.password).unwrap());
    let store = Arc::new(MemoryIdentityStore::new());
    let dyn_store: Arc<UserStore> = store.clone();

    let issuer = SessionIssuer::new(
        TokenCodec::new(),
        Arc::clone(&keys),
        hasher,
        Arc::clone(&dyn_store),
        &config,
    );
    let resolver = IdentityResolver::new(TokenCodec::new(), Arc::clone(&keys), dyn_store);

    Harness {
        keys,
        store,
        issuer,
        resolver,
    }
}

pub fn harness() -> Harness {
    harness_with(auth_config())
}
