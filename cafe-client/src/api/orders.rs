//! Order endpoints

use super::{entity, list};
use crate::{ClientResult, HttpClient};
use serde_json::Value;
use shared::models::{Order, OrderCreate, OrderStatus, OrderStatusUpdate};

impl HttpClient {
    /// All orders (staff and admin)
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        list(self.get("/orders").await?, "orders")
    }

    /// Orders of the signed-in customer
    pub async fn my_orders(&self) -> ClientResult<Vec<Order>> {
        list(self.get("/orders/my-orders").await?, "orders")
    }

    /// Place an order; returns the raw body, which holds the created order
    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<Value> {
        self.post("/orders", order).await
    }

    /// Set an order's status. Returns the updated order when the backend
    /// sends one back.
    pub async fn update_order_status(
        &self,
        id: &str,
        status: &OrderStatus,
    ) -> ClientResult<Option<Order>> {
        let body = OrderStatusUpdate {
            status: status.clone(),
        };
        let response: Value = self.put(&format!("/orders/{id}/status"), &body).await?;
        Ok(entity(response, "order").ok())
    }
}
