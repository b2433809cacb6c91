//! Role Model

use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who is signed in. Each role has its own login endpoint and its own
/// storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Staff,
    Admin,
}

impl Role {
    /// Token lookup order used when attaching the Authorization header
    pub const LOOKUP_ORDER: [Role; 3] = [Role::Customer, Role::Staff, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Storage key holding the bearer token
    pub fn token_key(&self) -> &'static str {
        match self {
            Role::Customer => "customerToken",
            Role::Staff => "staffToken",
            Role::Admin => "adminToken",
        }
    }

    /// Storage key holding the profile JSON
    pub fn data_key(&self) -> &'static str {
        match self {
            Role::Customer => "customerData",
            Role::Staff => "staffData",
            Role::Admin => "adminData",
        }
    }

    /// Storage key holding the user id
    pub fn id_key(&self) -> &'static str {
        match self {
            Role::Customer => "customerId",
            Role::Staff => "staffId",
            Role::Admin => "adminId",
        }
    }

    /// Login endpoint, relative to the API root
    pub fn login_path(&self) -> &'static str {
        match self {
            Role::Customer => "/customer/login",
            Role::Staff => "/staff/login",
            Role::Admin => "/admin/login",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(Role::Customer),
            "staff" => Ok(Role::Staff),
            "admin" => Ok(Role::Admin),
            other => Err(DomainError::unknown("role", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_order() {
        let keys: Vec<_> = Role::LOOKUP_ORDER.iter().map(|r| r.token_key()).collect();
        assert_eq!(keys, ["customerToken", "staffToken", "adminToken"]);
    }

    #[test]
    fn test_parse_role() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" staff ".parse::<Role>().unwrap(), Role::Staff);
        assert!("chef".parse::<Role>().is_err());
    }

    #[test]
    fn test_login_paths() {
        assert_eq!(Role::Customer.login_path(), "/customer/login");
        assert_eq!(Role::Staff.login_path(), "/staff/login");
        assert_eq!(Role::Admin.login_path(), "/admin/login");
    }
}
