//! Sign up and login

use crate::{ClientError, ClientResult, HttpClient};
use serde_json::Value;
use shared::client::{LoginRequest, LoginResponse};
use shared::models::{CustomerCreate, Profile, Role};

impl HttpClient {
    /// Login as `role`. Returns the token and profile; the caller decides
    /// whether to store them.
    pub async fn login(&self, role: Role, email: &str, password: &str) -> ClientResult<(String, Profile)> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.post::<LoginResponse, _>(role.login_path(), &request)
            .await?
            .into_session(role)
            .ok_or_else(|| ClientError::InvalidResponse("Invalid response from server".to_string()))
    }

    /// Register a customer account
    pub async fn sign_up(&self, customer: &CustomerCreate) -> ClientResult<Value> {
        self.post("/customer", customer).await
    }
}
