//! User domain entities.

pub mod model;
pub mod role;

pub use model::{CreateUser, NewAccount, User};
pub use role::UserRole;
