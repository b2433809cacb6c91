//! Contact form endpoint

use super::file_part;
use crate::{ClientResult, HttpClient};
use reqwest::multipart::Form;
use serde_json::Value;
use shared::models::ContactMessage;
use std::path::Path;

impl HttpClient {
    /// Send a contact message, optionally with a screenshot
    pub async fn send_contact(
        &self,
        message: &ContactMessage,
        attachment: Option<&Path>,
    ) -> ClientResult<Value> {
        let mut form = Form::new()
            .text("name", message.name.clone())
            .text("email", message.email.clone())
            .text("description", message.description.clone());
        if let Some(path) = attachment {
            form = form.part("file", file_part(path).await?);
        }
        self.post_multipart("/support/contact", form).await
    }
}
