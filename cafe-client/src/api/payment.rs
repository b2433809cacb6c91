//! Payment gateway endpoints

use crate::{ClientResult, HttpClient};
use serde_json::Value;
use shared::models::{PaymentIntent, PaymentMethod, PaymentRequest, PaymentVerify};

impl HttpClient {
    /// Open a gateway order for `total_amount`
    pub async fn create_payment(&self, total_amount: f64) -> ClientResult<PaymentIntent> {
        let request = PaymentRequest {
            total_amount,
            method: PaymentMethod::Online,
        };
        self.post("/payment", &request).await
    }

    /// Verify a gateway payment; the backend places the order on success
    pub async fn verify_payment(&self, verify: &PaymentVerify) -> ClientResult<Value> {
        self.post("/payment/verify", verify).await
    }
}
