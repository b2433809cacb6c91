//! Menu screen

use super::{ScreenResult, Storefront};
use crate::Notice;
use shared::models::{MenuItem, resolve_image_url};

impl Storefront {
    pub async fn menu(&self) -> ScreenResult<Vec<MenuItem>> {
        self.client
            .list_menu()
            .await
            .map_err(|e| Notice::from_error(&e, "Failed to load menu"))
    }

    /// Look up one item in the menu list
    pub async fn menu_item(&self, id: &str) -> ScreenResult<MenuItem> {
        self.menu()
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| Notice::error("Item not found in list."))
    }

    /// Absolute URL for an item's image
    pub fn image_url(&self, item: &MenuItem) -> Option<String> {
        item.image
            .as_deref()
            .and_then(|image| resolve_image_url(self.client.base_url(), image))
    }
}
