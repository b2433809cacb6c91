//! Order Model
//!
//! Orders move through a single forward pipeline:
//!
//! ```text
//! pending -> accepted -> preparing -> completed
//! ```
//!
//! `cancelled` can be reached from any state that is not terminal.

use super::user::UserRef;
use super::{lenient_choice, lenient_f64};
use crate::error::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// Parsed case-insensitively. Values outside the pipeline are kept in
/// `Unknown` so they survive a round trip; they have no successor and no
/// valid transitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Preparing,
    Completed,
    Cancelled,
    Unknown(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Next status in the pipeline, `None` for terminal or unknown states
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Accepted),
            OrderStatus::Accepted => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    /// Label of the action that moves an order to [`next`](Self::next)
    pub fn next_action_label(&self) -> Option<&'static str> {
        match self {
            OrderStatus::Pending => Some("Accept Order"),
            OrderStatus::Accepted => Some("Mark Preparing"),
            OrderStatus::Preparing => Some("Handed to Customer (Complete)"),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Accepted or preparing
    pub fn is_in_progress(&self) -> bool {
        matches!(self, OrderStatus::Accepted | OrderStatus::Preparing)
    }

    /// Cancellation is open to every known, non-terminal state
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Accepted | OrderStatus::Preparing
        )
    }

    /// Validate a requested change and return the target on success
    pub fn transition_to(&self, target: &OrderStatus) -> DomainResult<OrderStatus> {
        let allowed = match target {
            OrderStatus::Cancelled => self.can_cancel(),
            other => self.next().as_ref() == Some(other),
        };

        if allowed {
            Ok(target.clone())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.clone(),
                to: target.clone(),
            })
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "accepted" => OrderStatus::Accepted,
            "preparing" => OrderStatus::Preparing,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown(raw.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        OrderStatus::from(raw.as_str())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    /// Strict parse, rejecting values outside the pipeline
    fn from_str(s: &str) -> DomainResult<Self> {
        match OrderStatus::from(s) {
            OrderStatus::Unknown(raw) => Err(DomainError::unknown("order status", raw)),
            status => Ok(status),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fulfilment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Delivery,
    Pickup,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Delivery => "delivery",
            OrderType::Pickup => "pickup",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delivery" => Ok(OrderType::Delivery),
            "pickup" => Ok(OrderType::Pickup),
            other => Err(DomainError::unknown("order type", other)),
        }
    }
}

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    #[default]
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Online => "online",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "online" => Ok(PaymentMethod::Online),
            other => Err(DomainError::unknown("payment method", other)),
        }
    }
}

/// Product snapshot embedded in an order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderProduct {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
}

/// Line product: populated by the backend, or just the menu item id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProductRef {
    Populated(OrderProduct),
    Id(String),
}

impl ProductRef {
    pub fn name(&self) -> &str {
        match self {
            ProductRef::Populated(p) => &p.name,
            ProductRef::Id(id) => id,
        }
    }

    pub fn price(&self) -> Option<f64> {
        match self {
            ProductRef::Populated(p) => Some(p.price),
            ProductRef::Id(_) => None,
        }
    }
}

/// Order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub product: ProductRef,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_amount: f64,
    #[serde(rename = "type", default, deserialize_with = "lenient_choice")]
    pub order_type: Option<OrderType>,
    #[serde(default, deserialize_with = "lenient_choice")]
    pub method: Option<PaymentMethod>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn has_status(&self, status: &OrderStatus) -> bool {
        self.status.as_ref() == Some(status)
    }

    /// Next pipeline status for this order, if any
    pub fn next_status(&self) -> Option<OrderStatus> {
        self.status.as_ref().and_then(OrderStatus::next)
    }
}

/// Order line payload for checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineInput {
    /// Menu item id
    pub product: String,
    pub quantity: u32,
}

/// Create order payload (cash checkout)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub items: Vec<OrderLineInput>,
    pub total_amount: f64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub method: PaymentMethod,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_successors() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Accepted));
        assert_eq!(OrderStatus::Accepted.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::Completed.next(), None);
        assert_eq!(OrderStatus::Cancelled.next(), None);
        assert_eq!(OrderStatus::from("delivered").next(), None);
    }

    #[test]
    fn test_next_action_labels() {
        assert_eq!(OrderStatus::Pending.next_action_label(), Some("Accept Order"));
        assert_eq!(OrderStatus::Accepted.next_action_label(), Some("Mark Preparing"));
        assert_eq!(
            OrderStatus::Preparing.next_action_label(),
            Some("Handed to Customer (Complete)")
        );
        assert_eq!(OrderStatus::Completed.next_action_label(), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(OrderStatus::from("PENDING"), OrderStatus::Pending);
        assert_eq!(OrderStatus::from(" Preparing "), OrderStatus::Preparing);
        assert_eq!(
            OrderStatus::from("confirmed"),
            OrderStatus::Unknown("confirmed".to_string())
        );
        assert!("confirmed".parse::<OrderStatus>().is_err());
        assert_eq!("Completed".parse::<OrderStatus>().unwrap(), OrderStatus::Completed);
    }

    #[test]
    fn test_transitions() {
        assert!(OrderStatus::Pending.transition_to(&OrderStatus::Accepted).is_ok());
        assert!(OrderStatus::Pending.transition_to(&OrderStatus::Preparing).is_err());
        assert!(OrderStatus::Preparing.transition_to(&OrderStatus::Accepted).is_err());
        assert!(OrderStatus::Accepted.transition_to(&OrderStatus::Cancelled).is_ok());
        assert!(OrderStatus::Completed.transition_to(&OrderStatus::Cancelled).is_err());
        assert!(OrderStatus::Cancelled.transition_to(&OrderStatus::Pending).is_err());

        let unknown = OrderStatus::from("delivered");
        assert!(unknown.transition_to(&OrderStatus::Cancelled).is_err());
        assert!(unknown.transition_to(&OrderStatus::Completed).is_err());
    }

    #[test]
    fn test_order_deserialize() {
        let json = serde_json::json!({
            "_id": "o1",
            "user": { "name": "Asha", "email": "asha@example.com", "phone": "99999" },
            "items": [
                { "product": { "_id": "m1", "name": "Latte", "price": 120 }, "quantity": 2 },
                { "product": "m2", "quantity": 1 }
            ],
            "totalAmount": 340,
            "type": "pickup",
            "method": "cash",
            "status": "Pending",
            "createdAt": "2024-12-25T10:30:00.000Z"
        });

        let order: Order = serde_json::from_value(json).unwrap();
        assert_eq!(order.id, "o1");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product.name(), "Latte");
        assert_eq!(order.items[0].product.price(), Some(120.0));
        assert_eq!(order.items[1].product, ProductRef::Id("m2".to_string()));
        assert_eq!(order.total_amount, 340.0);
        assert_eq!(order.order_type, Some(OrderType::Pickup));
        assert_eq!(order.method, Some(PaymentMethod::Cash));
        assert_eq!(order.status, Some(OrderStatus::Pending));
        assert!(order.created_at.is_some());
        assert_eq!(order.next_status(), Some(OrderStatus::Accepted));
    }

    #[test]
    fn test_odd_records_do_not_fail_the_list() {
        let orders: Vec<Order> = serde_json::from_value(serde_json::json!([
            { "_id": "o1", "user": "64f0c0ffee", "status": "pending", "totalAmount": 10 },
            { "_id": "o2", "type": "Delivery", "method": "CASH", "status": "accepted" },
            { "_id": "o3", "type": "dine-in", "method": 7 }
        ]))
        .unwrap();

        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].user, Some(UserRef::Id("64f0c0ffee".to_string())));
        assert_eq!(orders[0].user.as_ref().unwrap().name(), "Walk-in");
        assert_eq!(orders[1].order_type, Some(OrderType::Delivery));
        assert_eq!(orders[1].method, Some(PaymentMethod::Cash));
        assert_eq!(orders[2].order_type, None);
        assert_eq!(orders[2].method, None);
    }

    #[test]
    fn test_order_without_status_or_date() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": "o2",
            "totalAmount": "45.50"
        }))
        .unwrap();
        assert_eq!(order.status, None);
        assert_eq!(order.created_at, None);
        assert_eq!(order.total_amount, 45.5);
        assert_eq!(order.next_status(), None);
    }

    #[test]
    fn test_order_create_serialize() {
        let create = OrderCreate {
            items: vec![OrderLineInput {
                product: "m1".to_string(),
                quantity: 2,
            }],
            total_amount: 240.0,
            order_type: OrderType::Delivery,
            method: PaymentMethod::Cash,
        };
        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "items": [{ "product": "m1", "quantity": 2 }],
                "totalAmount": 240.0,
                "type": "delivery",
                "method": "cash"
            })
        );
    }
}
