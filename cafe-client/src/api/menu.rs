//! Menu endpoints

use super::{entity, file_part, list};
use crate::{ClientError, ClientResult, HttpClient};
use reqwest::multipart::Form;
use serde_json::Value;
use shared::client::ImageUploadResponse;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use std::path::Path;

impl HttpClient {
    pub async fn list_menu(&self) -> ClientResult<Vec<MenuItem>> {
        list(self.get("/menu").await?, "menu")
    }

    pub async fn get_menu_item(&self, id: &str) -> ClientResult<MenuItem> {
        entity(self.get(&format!("/menu/{id}")).await?, "menuItem")
    }

    /// Create a menu item, with an optional image file
    pub async fn create_menu_item(
        &self,
        item: &MenuItemCreate,
        image: Option<&Path>,
    ) -> ClientResult<Value> {
        let mut form = Form::new()
            .text("name", item.name.clone())
            .text("description", item.description.clone())
            .text("price", item.price.to_string())
            .text("category", item.category.clone());
        if let Some(path) = image {
            form = form.part("image", file_part(path).await?);
        }
        self.post_multipart("/menu/create", form).await
    }

    pub async fn update_menu_item(&self, id: &str, update: &MenuItemUpdate) -> ClientResult<Value> {
        self.put(&format!("/menu/{id}"), update).await
    }

    /// Upload an image and return its public URL
    pub async fn upload_image(&self, path: &Path) -> ClientResult<String> {
        let form = Form::new().part("image", file_part(path).await?);
        let response: ImageUploadResponse = self.post_multipart("/upload/image", form).await?;
        match response {
            ImageUploadResponse {
                success: true,
                image_url: Some(url),
            } => Ok(url),
            _ => Err(ClientError::InvalidResponse("Image upload failed".to_string())),
        }
    }
}
