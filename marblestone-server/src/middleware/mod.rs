pub mod auth;

pub use auth::{require_token, verify_token, Claims};
