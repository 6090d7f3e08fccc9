pub mod user;

pub use user::UserRecord;

/// Server-assigned roles. Inserts overwrite whatever the client submitted.
pub const ROLE_AGENT: &str = "agent";
pub const ROLE_USER: &str = "user";
