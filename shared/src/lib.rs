//! Shared types for the café storefront
//!
//! Domain models, the order status pipeline, the cart store and the
//! derived metrics (revenue, dashboard groupings) used by the API client
//! and the command line front end.

pub mod cart;
pub mod client;
pub mod error;
pub mod metrics;
pub mod models;
pub mod money;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartItem, CartStore};
pub use error::{DomainError, DomainResult};
pub use metrics::{RevenueSummary, revenue_summary};
pub use models::{
    MenuItem, Order, OrderStatus, OrderType, PaymentMethod, Reservation, ReservationStatus, Role,
};
