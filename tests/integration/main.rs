//! Integration tests driving the full router over an in-memory identity store.

mod auth_test;
mod helpers;
mod session_test;
mod token_test;
