//! Contact form

use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Contact form fields; a screenshot may be attached by the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub description: String,
}

impl ContactMessage {
    /// Name and email are required, the description may be empty
    pub fn new(name: &str, email: &str, description: &str) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(DomainError::MissingField("email"));
        }
        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            description: description.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        assert!(ContactMessage::new("Asha", "asha@example.com", "").is_ok());
        assert_eq!(
            ContactMessage::new(" ", "asha@example.com", "hi"),
            Err(DomainError::MissingField("name"))
        );
        assert_eq!(
            ContactMessage::new("Asha", "", "hi"),
            Err(DomainError::MissingField("email"))
        );
    }
}
