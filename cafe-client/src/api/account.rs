//! Customer and staff profile endpoints

use super::entity;
use crate::{ClientResult, HttpClient};
use shared::models::{Profile, ProfileField};

impl HttpClient {
    pub async fn get_customer(&self, id: &str) -> ClientResult<Profile> {
        entity(self.get(&format!("/customer/{id}")).await?, "customer")
    }

    /// Update one field of a customer profile, returning the new profile
    pub async fn update_customer(
        &self,
        id: &str,
        field: ProfileField,
        value: &str,
    ) -> ClientResult<Profile> {
        let body = field.payload(value);
        entity(self.put(&format!("/customer/{id}"), &body).await?, "customer")
    }

    /// Update one field of a staff profile, returning the new profile
    pub async fn update_staff(
        &self,
        id: &str,
        field: ProfileField,
        value: &str,
    ) -> ClientResult<Profile> {
        let body = field.payload(value);
        entity(self.put(&format!("/staff/{id}"), &body).await?, "staff")
    }
}
