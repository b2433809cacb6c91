//! "My orders" screen

use super::{ScreenResult, Storefront};
use crate::Notice;
use shared::models::{Order, Role};

impl Storefront {
    /// Orders of the signed-in customer, newest first
    pub async fn my_orders(&self) -> ScreenResult<Vec<Order>> {
        self.require_profile_id(Role::Customer, "Please log in as a customer to view your orders")?;
        let mut orders = self
            .client
            .my_orders()
            .await
            .map_err(|e| Notice::from_error(&e, "Failed to fetch your orders"))?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}
