//! Admin endpoints

use super::{entity, list};
use crate::{ClientResult, HttpClient};
use serde_json::Value;
use shared::models::{Profile, StaffCreate};

impl HttpClient {
    pub async fn admin_profile(&self) -> ClientResult<Profile> {
        entity(self.get("/admin/profile").await?, "admin")
    }

    pub async fn list_staff(&self) -> ClientResult<Vec<Profile>> {
        list(self.get("/admin/staff").await?, "staff")
    }

    pub async fn create_staff(&self, staff: &StaffCreate) -> ClientResult<Value> {
        self.post("/admin/staff", staff).await
    }

    pub async fn list_customers(&self) -> ClientResult<Vec<Profile>> {
        list(self.get("/admin/customer").await?, "customers")
    }
}
