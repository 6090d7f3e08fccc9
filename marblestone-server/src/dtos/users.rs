use serde::Deserialize;

/// User creation payload. `email` is required; everything the client sends
/// beyond these three fields is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: String,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}
