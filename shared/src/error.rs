//! Error types for the shared crate
//!
//! Failures raised by pure domain logic: status transitions, enum parsing
//! and cart lookups. Network and storage failures live in the client crate.

use crate::models::{OrderStatus, ReservationStatus};
use thiserror::Error;

/// Domain error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Requested order status change is not allowed by the pipeline
    #[error("invalid order transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Reservation status is not one staff can set
    #[error("unsupported reservation status: {0}")]
    UnsupportedReservationStatus(ReservationStatus),

    /// Unknown value for a closed set (role, order type, payment method)
    #[error("unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    /// Cart does not contain the given item id
    #[error("item not in cart: {0}")]
    NotInCart(String),

    /// A required field was left empty
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl DomainError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind,
            value: value.into(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::InvalidTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::Pending,
        };
        assert_eq!(err.to_string(), "invalid order transition: completed -> pending");

        let err = DomainError::unknown("role", "chef");
        assert_eq!(err.to_string(), "unknown role: chef");

        assert_eq!(DomainError::MissingField("email").to_string(), "email is required");
    }
}
