pub mod agents;
pub mod blogs;
pub mod contacts;
pub mod health;
pub mod properties;
pub mod users;

pub use agents::{create_agent, get_agent, list_agents};
pub use blogs::{create_blog, get_blog, list_blogs};
pub use contacts::{create_contact, delete_contacts, get_contact, list_contacts};
pub use health::{health_check, liveness};
pub use properties::{create_property, get_property, list_properties};
pub use users::{create_user, list_users};
