//! Request/response types for the auth endpoints
//!
//! Shared by the API client and anything that mocks the backend.

use crate::models::{Profile, Role};
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
///
/// The profile arrives under a key named after the role:
/// `{"token": "...", "customer": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Token and profile for `role`, if both are present
    pub fn into_session(self, role: Role) -> Option<(String, Profile)> {
        let profile = match role {
            Role::Customer => self.customer,
            Role::Staff => self.staff,
            Role::Admin => self.admin,
        };
        self.token.zip(profile)
    }
}

/// Image upload response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_for_role() {
        let json = serde_json::json!({
            "token": "t-staff",
            "staff": { "_id": "s1", "name": "Ravi", "email": "ravi@example.com", "role": "waiter" }
        });

        let response: LoginResponse = serde_json::from_value(json.clone()).unwrap();
        let (token, profile) = response.into_session(Role::Staff).unwrap();
        assert_eq!(token, "t-staff");
        assert_eq!(profile.role.as_deref(), Some("waiter"));

        let response: LoginResponse = serde_json::from_value(json).unwrap();
        assert!(response.into_session(Role::Admin).is_none());
    }
}
