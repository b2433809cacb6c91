//! Customer profile/settings and staff profile screens

use super::{ScreenResult, Storefront};
use crate::Notice;
use shared::models::{Profile, ProfileField, Role};

impl Storefront {
    /// Fresh customer profile, falling back to the stored copy when the
    /// backend can't be reached
    pub async fn customer_profile(&self) -> ScreenResult<Profile> {
        let id = self.require_profile_id(Role::Customer, "Session expired! Please log in again.")?;
        match self.client.get_customer(&id).await {
            Ok(profile) => {
                if let Err(e) = self.session().update_profile(Role::Customer, &profile) {
                    tracing::warn!(error = %e, "Could not refresh stored profile");
                }
                Ok(profile)
            }
            Err(e) if e.is_unauthorized() => Err(Notice::from_error(&e, "Failed to load profile")),
            Err(e) => {
                tracing::warn!(error = %e, "Using cached profile");
                self.session()
                    .profile(Role::Customer)
                    .ok_or_else(|| Notice::from_error(&e, "Failed to load profile"))
            }
        }
    }

    pub async fn update_customer_field(&self, field: ProfileField, value: &str) -> Notice {
        let id = match self.require_profile_id(Role::Customer, "Please log in again") {
            Ok(id) => id,
            Err(notice) => return notice,
        };
        let result = self.client.update_customer(&id, field, value).await;
        self.apply_profile_update(Role::Customer, field, result)
    }

    pub async fn update_staff_field(&self, field: ProfileField, value: &str) -> Notice {
        let id = match self.require_profile_id(Role::Staff, "No staff logged in! Please login again.") {
            Ok(id) => id,
            Err(notice) => return notice,
        };
        let result = self.client.update_staff(&id, field, value).await;
        self.apply_profile_update(Role::Staff, field, result)
    }

    fn apply_profile_update(
        &self,
        role: Role,
        field: ProfileField,
        result: crate::ClientResult<Profile>,
    ) -> Notice {
        let failed = format!("Failed to update {}", field.as_str());
        match result.and_then(|profile| self.session().update_profile(role, &profile)) {
            Ok(()) => Notice::success(format!("{} updated successfully", field.as_str())),
            Err(e) => Notice::from_error(&e, &failed),
        }
    }
}
