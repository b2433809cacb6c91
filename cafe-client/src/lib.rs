//! Café Client - API client for the café storefront backend
//!
//! Typed access to the REST API plus the behaviour of each storefront
//! screen: what it fetches, what it writes back to local storage, and which
//! notice the user sees.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod notice;
pub mod screens;
pub mod session;
pub mod storage;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use notice::{Notice, NoticeLevel};
pub use screens::Storefront;
pub use session::{Session, SessionStore};
pub use storage::LocalStorage;

// Re-export shared types for convenience
pub use shared::client::{ImageUploadResponse, LoginRequest, LoginResponse};
pub use shared::models::*;
pub use shared::{CartItem, CartStore};
