//! Customer, staff and admin accounts

use crate::error::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Account profile as returned by login and profile endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Staff position (e.g. "waiter"); absent for customers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Case-insensitive match on name or email
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }
}

/// Contact details embedded in orders and reservations
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    #[serde(alias = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Account on an order or reservation: populated by the backend, or just
/// the account id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UserRef {
    Populated(UserSummary),
    Id(String),
}

impl UserRef {
    /// Display name; walk-in when the account is not populated or unnamed
    pub fn name(&self) -> &str {
        match self {
            UserRef::Populated(u) if !u.name.trim().is_empty() => &u.name,
            _ => "Walk-in",
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            UserRef::Populated(u) if !u.email.is_empty() => Some(&u.email),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            UserRef::Populated(u) => u.id.as_deref(),
            UserRef::Id(id) => Some(id),
        }
    }
}

/// Customer sign-up payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Create staff payload (admin only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl StaffCreate {
    pub const DEFAULT_ROLE: &'static str = "waiter";
}

/// Single-field profile update (`{"name": "..."}`, `{"phone": "..."}`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Password,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Password => "password",
        }
    }

    /// JSON body for updating just this field
    pub fn payload(&self, value: &str) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(self.as_str().to_string(), serde_json::Value::from(value));
        serde_json::Value::Object(body)
    }
}

impl FromStr for ProfileField {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ProfileField::Name),
            "email" => Ok(ProfileField::Email),
            "phone" => Ok(ProfileField::Phone),
            "password" => Ok(ProfileField::Password),
            other => Err(DomainError::unknown("profile field", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_accepts_mongo_id() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "name": "Asha",
            "email": "asha@example.com"
        }))
        .unwrap();
        assert_eq!(profile.id, "c1");
        assert_eq!(profile.phone, None);
    }

    #[test]
    fn test_profile_search() {
        let profile = Profile {
            id: "c1".to_string(),
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: None,
            role: None,
            created_at: None,
        };
        assert!(profile.matches("ASHA"));
        assert!(profile.matches("example.com"));
        assert!(!profile.matches("bob"));
    }

    #[test]
    fn test_user_ref_shapes() {
        let populated: UserRef = serde_json::from_value(serde_json::json!({
            "_id": "c1", "name": "Asha", "email": "asha@example.com"
        }))
        .unwrap();
        assert_eq!(populated.name(), "Asha");
        assert_eq!(populated.email(), Some("asha@example.com"));
        assert_eq!(populated.id(), Some("c1"));

        let bare: UserRef = serde_json::from_value(serde_json::json!("64f0c0ffee")).unwrap();
        assert_eq!(bare, UserRef::Id("64f0c0ffee".to_string()));
        assert_eq!(bare.name(), "Walk-in");
        assert_eq!(bare.email(), None);
        assert_eq!(bare.id(), Some("64f0c0ffee"));
    }

    #[test]
    fn test_field_payload() {
        assert_eq!(
            ProfileField::Phone.payload("12345"),
            serde_json::json!({ "phone": "12345" })
        );
        assert_eq!("Password".parse::<ProfileField>().unwrap(), ProfileField::Password);
        assert!("address".parse::<ProfileField>().is_err());
    }
}
