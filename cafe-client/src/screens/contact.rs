//! Contact screen

use super::Storefront;
use crate::Notice;
use shared::models::ContactMessage;
use std::path::Path;

impl Storefront {
    pub async fn contact(
        &self,
        name: &str,
        email: &str,
        description: &str,
        attachment: Option<&Path>,
    ) -> Notice {
        let message = match ContactMessage::new(name, email, description) {
            Ok(m) => m,
            Err(_) => return Notice::error("Please enter your name and email."),
        };

        match self.client.send_contact(&message, attachment).await {
            Ok(_) => Notice::success("Thanks! Your message was submitted."),
            Err(e) => Notice::from_error(&e, "Failed to send your message"),
        }
    }
}
