//! Checkout screen
//!
//! Cash orders are placed directly. Online orders open a gateway payment
//! first; the order is only placed once the gateway's signed confirmation
//! is verified by the backend. The cart is kept until then.

use super::{ScreenResult, Storefront};
use crate::Notice;
use shared::CartStore;
use shared::models::{
    OrderCreate, PaymentConfirmation, PaymentIntent, PaymentMethod, PaymentVerify,
};

/// What happened at checkout
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Order placed, cart emptied
    Placed(Notice),
    /// Gateway order opened; pay and then call
    /// [`Storefront::confirm_payment`]
    AwaitingPayment(PaymentIntent),
}

impl Storefront {
    pub async fn checkout(&self, method: PaymentMethod) -> ScreenResult<CheckoutOutcome> {
        let (_, cart) = self.checkout_state()?;
        let total = cart.total();

        match method {
            PaymentMethod::Cash => {
                let order = OrderCreate {
                    items: cart.order_lines(),
                    total_amount: total,
                    order_type: self.session().order_type(),
                    method: PaymentMethod::Cash,
                };
                self.client
                    .create_order(&order)
                    .await
                    .map_err(|e| Notice::from_error(&e, "Something went wrong. Try again."))?;
                tracing::info!(total, items = order.items.len(), "Cash order placed");
                Ok(CheckoutOutcome::Placed(
                    self.finish_checkout("Order placed successfully!"),
                ))
            }
            PaymentMethod::Online => {
                let intent = self
                    .client
                    .create_payment(total)
                    .await
                    .map_err(|e| Notice::from_error(&e, "Something went wrong. Try again."))?;
                tracing::info!(gateway_order = %intent.order_id, total, "Payment opened");
                Ok(CheckoutOutcome::AwaitingPayment(intent))
            }
        }
    }

    /// Verify a completed gateway payment; places the order on success
    pub async fn confirm_payment(&self, confirmation: PaymentConfirmation) -> Notice {
        let (user_id, cart) = match self.checkout_state() {
            Ok(state) => state,
            Err(notice) => return notice,
        };

        let verify = PaymentVerify {
            confirmation,
            user_id,
            items: cart.order_lines(),
            total_amount: cart.total(),
            order_type: self.session().order_type(),
            method: PaymentMethod::Online,
        };

        match self.client.verify_payment(&verify).await {
            Ok(_) => {
                tracing::info!(
                    gateway_order = %verify.confirmation.razorpay_order_id,
                    "Payment verified"
                );
                self.finish_checkout("Payment successful! Order placed.")
            }
            Err(e) => Notice::from_error(&e, "Payment verification failed. Please contact support."),
        }
    }

    /// Signed-in user id and a non-empty cart
    fn checkout_state(&self) -> ScreenResult<(String, CartStore)> {
        let session = self.session();
        let user_id = match (session.token(), session.user_id()) {
            (Some(_), Some(id)) => id,
            _ => return Err(Notice::login_required("You must be logged in to proceed.")),
        };

        let cart = self.cart();
        if cart.is_empty() {
            return Err(Notice::error("Your cart is empty."));
        }
        Ok((user_id, cart))
    }

    /// Empty the cart and forget the order type
    fn finish_checkout(&self, message: &str) -> Notice {
        let cleared = self
            .session()
            .save_cart(&CartStore::new())
            .and_then(|()| self.session().clear_order_type());
        if let Err(e) = cleared {
            tracing::warn!(error = %e, "Order placed but checkout state was not cleared");
        }
        Notice::success(message)
    }
}
