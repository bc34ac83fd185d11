//! Request and response data transfer objects.

pub mod request;
pub mod response;

pub use request::{LoginRequest, RegisterRequest};
pub use response::{DataResponse, TokenResponse, UserEnvelope, UserResponse};
