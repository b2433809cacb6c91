//! Online payment (gateway checkout)
//!
//! The backend opens a gateway order, the customer pays in the gateway's
//! own checkout, and the signed result is posted back for verification.
//! Only the two API calls are modelled here.

use super::lenient_f64;
use super::order::{OrderLineInput, OrderType, PaymentMethod};
use serde::{Deserialize, Serialize};

/// Open a gateway order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub total_amount: f64,
    pub method: PaymentMethod,
}

/// Gateway order handed to the checkout widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    /// Public gateway key
    pub key: String,
    /// Amount in the smallest currency unit
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,
    pub currency: String,
    pub order_id: String,
}

/// Signed result returned by the gateway after a successful payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentConfirmation {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Verify a payment and place the order in one call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerify {
    #[serde(flatten)]
    pub confirmation: PaymentConfirmation,
    pub user_id: String,
    pub items: Vec<OrderLineInput>,
    pub total_amount: f64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_payload_shape() {
        let verify = PaymentVerify {
            confirmation: PaymentConfirmation {
                razorpay_order_id: "order_1".to_string(),
                razorpay_payment_id: "pay_1".to_string(),
                razorpay_signature: "sig".to_string(),
            },
            user_id: "c1".to_string(),
            items: vec![OrderLineInput {
                product: "m1".to_string(),
                quantity: 1,
            }],
            total_amount: 120.0,
            order_type: OrderType::Pickup,
            method: PaymentMethod::Online,
        };

        let value = serde_json::to_value(&verify).unwrap();
        assert_eq!(value["razorpay_order_id"], "order_1");
        assert_eq!(value["razorpay_signature"], "sig");
        assert_eq!(value["userId"], "c1");
        assert_eq!(value["totalAmount"], 120.0);
        assert_eq!(value["type"], "pickup");
        assert_eq!(value["method"], "online");
    }

    #[test]
    fn test_intent_deserialize() {
        let intent: PaymentIntent = serde_json::from_value(serde_json::json!({
            "key": "rzp_test",
            "amount": 24000,
            "currency": "INR",
            "orderId": "order_1"
        }))
        .unwrap();
        assert_eq!(intent.amount, 24000.0);
        assert_eq!(intent.order_id, "order_1");
    }
}
