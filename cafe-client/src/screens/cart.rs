//! Cart screen
//!
//! The cart itself is a plain [`CartStore`]; these helpers load it from and
//! save it to storage around each change.

use super::{ScreenResult, Storefront};
use crate::Notice;
use shared::models::{MenuItem, OrderType};
use shared::{CartStore, DomainResult};

impl Storefront {
    pub fn cart(&self) -> CartStore {
        self.session().load_cart()
    }

    /// Apply `change` to the stored cart and save the result
    pub fn update_cart<T>(
        &self,
        change: impl FnOnce(&mut CartStore) -> DomainResult<T>,
    ) -> ScreenResult<T> {
        let mut cart = self.cart();
        let value = change(&mut cart).map_err(|e| Notice::error(e.to_string()))?;
        self.session()
            .save_cart(&cart)
            .map_err(|e| Notice::from_error(&e, "Could not save cart"))?;
        Ok(value)
    }

    pub fn add_to_cart(&self, item: &MenuItem) -> Notice {
        match self.update_cart(|cart| Ok(cart.add(item).quantity)) {
            Ok(_) => Notice::success(format!("{} added to cart successfully!", item.name)),
            Err(notice) => notice,
        }
    }

    pub fn remove_from_cart(&self, id: &str) -> Notice {
        match self.update_cart(|cart| Ok(cart.remove(id))) {
            Ok(Some(item)) => Notice::success(format!("{} removed from cart", item.name)),
            Ok(None) => Notice::error("Item not in cart"),
            Err(notice) => notice,
        }
    }

    pub fn clear_cart(&self) -> Notice {
        match self.update_cart(|cart| {
            cart.clear();
            Ok(())
        }) {
            Ok(()) => Notice::success("Cart cleared"),
            Err(notice) => notice,
        }
    }

    /// Remember delivery/pickup for checkout
    pub fn choose_order_type(&self, order_type: OrderType) -> Notice {
        if self.cart().is_empty() {
            return Notice::error("Your cart is empty");
        }
        match self.session().set_order_type(order_type) {
            Ok(()) => Notice::success(format!("Order type set to {order_type}")),
            Err(e) => Notice::from_error(&e, "Could not save order type"),
        }
    }
}
