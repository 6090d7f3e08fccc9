use serde::Deserialize;

/// Bulk-delete payload: hex identifiers of the contact records to remove.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteContactsRequest {
    pub ids: Vec<String>,
}
