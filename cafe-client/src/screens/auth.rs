//! Login, sign up and logout

use super::Storefront;
use crate::Notice;
use shared::models::{CustomerCreate, Profile, Role};

impl Storefront {
    /// Sign in as `role` and store the session
    pub async fn login(&self, role: Role, email: &str, password: &str) -> Notice {
        if email.trim().is_empty() || password.is_empty() {
            return Notice::error("Email and password are required");
        }

        let (token, profile) = match self.client.login(role, email.trim(), password).await {
            Ok(session) => session,
            Err(e) if e.is_unauthorized() => {
                tracing::warn!(role = %role, "Login rejected");
                return Notice::error("Login failed. Check your credentials.");
            }
            Err(e) => return Notice::from_error(&e, "Login failed. Check your credentials."),
        };

        if let Err(e) = self.session().save(role, &token, &profile) {
            return Notice::from_error(&e, "Could not save session");
        }
        tracing::info!(role = %role, user_id = %profile.id, "Logged in");
        Notice::success(welcome(role, &profile))
    }

    /// Register a customer account
    pub async fn sign_up(&self, customer: CustomerCreate) -> Notice {
        let required = [
            ("name", &customer.name),
            ("email", &customer.email),
            ("phone", &customer.phone),
            ("password", &customer.password),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Notice::error(format!("{field} is required"));
        }

        match self.client.sign_up(&customer).await {
            Ok(_) => {
                tracing::info!(email = %customer.email, "Customer registered");
                Notice::success("Account created. Please log in.")
            }
            Err(e) => Notice::from_error(&e, "Sign up failed"),
        }
    }

    pub fn logout(&self) -> Notice {
        match self.session().clear() {
            Ok(()) => Notice::success("Logged out successfully!"),
            Err(e) => Notice::from_error(&e, "Could not clear session"),
        }
    }
}

fn welcome(role: Role, profile: &Profile) -> String {
    let name = profile.name.trim();
    match role {
        Role::Customer if name.is_empty() => "Welcome back!".to_string(),
        Role::Customer => format!("Welcome {name}!"),
        Role::Staff => format!("Welcome back, {name}!"),
        Role::Admin if name.is_empty() => "Welcome Admin, Dashboard!".to_string(),
        Role::Admin => format!("Welcome Admin, {name}!"),
    }
}
