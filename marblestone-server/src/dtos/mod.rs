pub mod contacts;
pub mod records;
pub mod users;

pub use contacts::DeleteContactsRequest;
pub use records::{delete_ack, document_to_json, documents_to_json, insert_ack};
pub use users::CreateUserRequest;
