use serde::{Deserialize, Serialize};

/// The only entity with a fixed shape: user creation keeps exactly
/// `name`, `email` and `photoURL` from the request and stamps the role.
/// Any other submitted field is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub role: String,
}

impl UserRecord {
    pub fn new(name: Option<String>, email: String, photo_url: Option<String>) -> Self {
        Self {
            name,
            email,
            photo_url,
            role: super::ROLE_USER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_gets_the_user_role() {
        let user = UserRecord::new(
            Some("Jane".to_string()),
            "jane@example.com".to_string(),
            None,
        );
        assert_eq!(user.role, "user");
    }

    #[test]
    fn absent_optional_fields_are_not_serialized() {
        let user = UserRecord::new(None, "jane@example.com".to_string(), None);
        let doc = mongodb::bson::to_document(&user).expect("Failed to serialize user");

        assert!(!doc.contains_key("name"));
        assert!(!doc.contains_key("photoURL"));
        assert_eq!(doc.get_str("email").unwrap(), "jane@example.com");
        assert_eq!(doc.get_str("role").unwrap(), "user");
    }
}
