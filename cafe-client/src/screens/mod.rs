//! Storefront screens
//!
//! One module per screen of the storefront. Reads return
//! `Result<T, Notice>`; writes return the [`Notice`] the user sees. Every
//! failure is logged and converted here; nothing is retried.

mod account;
mod admin;
mod auth;
mod cart;
mod checkout;
mod contact;
mod dashboard;
mod menu;
mod orders;
mod reservations;

pub use checkout::CheckoutOutcome;
pub use dashboard::{AdminDashboard, StaffDashboard};

use crate::{ClientConfig, ClientResult, HttpClient, Notice, Session, SessionStore};
use shared::models::Role;

/// Result of a screen that loads data
pub type ScreenResult<T> = Result<T, Notice>;

/// Entry point for every storefront screen
#[derive(Debug, Clone)]
pub struct Storefront {
    client: HttpClient,
}

impl Storefront {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(HttpClient::new(config)?))
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn session(&self) -> &SessionStore {
        self.client.session()
    }

    /// Session for `role`, or a login-required notice
    fn require(&self, role: Role, message: &str) -> ScreenResult<Session> {
        self.session().session(role).ok_or_else(|| {
            tracing::warn!(role = %role, "No session for screen");
            Notice::login_required(message)
        })
    }

    /// Signed-in profile id for `role`
    fn require_profile_id(&self, role: Role, message: &str) -> ScreenResult<String> {
        let session = self.require(role, message)?;
        session
            .profile
            .map(|p| p.id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Notice::login_required(message))
    }
}
