//! Admin screens: staff, customers, menu management

use super::{ScreenResult, Storefront};
use crate::Notice;
use shared::models::{MenuItemCreate, MenuItemUpdate, Profile, Role, StaffCreate};
use std::path::Path;

impl Storefront {
    pub async fn admin_profile(&self) -> ScreenResult<Profile> {
        self.require(Role::Admin, "Admin not logged in")?;
        self.client
            .admin_profile()
            .await
            .map_err(|e| Notice::from_error(&e, "Could not load profile"))
    }

    pub async fn staff_list(&self) -> ScreenResult<Vec<Profile>> {
        self.require(Role::Admin, "Admin not logged in")?;
        self.client
            .list_staff()
            .await
            .map_err(|e| Notice::from_error(&e, "Failed to fetch staff"))
    }

    /// Customers, optionally narrowed by a name/email search term
    pub async fn customer_list(&self, search: Option<&str>) -> ScreenResult<Vec<Profile>> {
        self.require(Role::Admin, "Admin not logged in")?;
        let customers = self
            .client
            .list_customers()
            .await
            .map_err(|e| Notice::from_error(&e, "Failed to fetch customers"))?;

        Ok(match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => customers.into_iter().filter(|c| c.matches(term)).collect(),
            None => customers,
        })
    }

    /// Create a staff account; an empty role becomes "waiter"
    pub async fn create_staff(&self, mut staff: StaffCreate) -> Notice {
        if let Err(notice) = self.require(Role::Admin, "Admin not logged in!") {
            return notice;
        }
        if staff.name.trim().is_empty() || staff.email.trim().is_empty() || staff.password.is_empty() {
            return Notice::error("Name, email and password are required");
        }
        if staff.role.trim().is_empty() {
            staff.role = StaffCreate::DEFAULT_ROLE.to_string();
        }

        match self.client.create_staff(&staff).await {
            Ok(body) => {
                tracing::info!(email = %staff.email, role = %staff.role, "Staff created");
                let message = body
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Staff member created successfully!");
                Notice::success(message)
            }
            Err(e) => Notice::from_error(&e, "Failed to create staff"),
        }
    }

    pub async fn create_menu_item(&self, item: MenuItemCreate, image: Option<&Path>) -> Notice {
        if let Err(notice) = self.require(Role::Admin, "Admin not logged in") {
            return notice;
        }
        if item.name.trim().is_empty() || item.category.trim().is_empty() {
            return Notice::error("Name and category are required");
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Notice::error("Price must be a non-negative number");
        }

        match self.client.create_menu_item(&item, image).await {
            Ok(_) => {
                tracing::info!(name = %item.name, category = %item.category, "Menu item created");
                Notice::success("Menu item created successfully!")
            }
            Err(e) => Notice::from_error(&e, "Failed to create menu item"),
        }
    }

    /// Update a menu item, uploading a replacement image first when given
    pub async fn edit_menu_item(
        &self,
        id: &str,
        mut update: MenuItemUpdate,
        new_image: Option<&Path>,
    ) -> Notice {
        if let Some(path) = new_image {
            match self.client.upload_image(path).await {
                Ok(url) => update.image = url,
                Err(e) => return Notice::from_error(&e, "Image upload failed"),
            }
        }

        match self.client.update_menu_item(id, &update).await {
            Ok(_) => {
                tracing::info!(menu_item = %id, "Menu item updated");
                Notice::success("Menu item updated successfully!")
            }
            Err(e) => Notice::from_error(&e, "Failed to update menu item"),
        }
    }
}
