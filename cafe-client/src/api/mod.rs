//! Endpoint methods, grouped by resource
//!
//! Each module adds an `impl HttpClient` block. Methods return typed data
//! and leave error presentation to the screens.

mod account;
mod admin;
mod auth;
mod menu;
mod orders;
mod payment;
mod reservations;
mod support;

use crate::{ClientError, ClientResult};
use reqwest::multipart::Part;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Decode a list that may be wrapped under `key`
pub(crate) fn list<T: DeserializeOwned>(value: Value, key: &str) -> ClientResult<Vec<T>> {
    shared::response::unwrap_list(value, key).map_err(Into::into)
}

/// Decode an entity that may be wrapped under `key`
pub(crate) fn entity<T: DeserializeOwned>(value: Value, key: &str) -> ClientResult<T> {
    shared::response::unwrap_entity(value, key).map_err(Into::into)
}

/// Read a file into a multipart part, guessing its content type from the name
pub(crate) async fn file_part(path: &Path) -> ClientResult<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ClientError::Validation(format!("not a file: {}", path.display())))?
        .to_string();
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime.essence_str())
        .map_err(Into::into)
}
