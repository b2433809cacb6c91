//! Cart store
//!
//! Keyed, ordered list of selected menu items. Every entry has a quantity of
//! at least one; decrementing past one drops the entry. The store is plain
//! owned data: persisting it (or not) is up to the caller.

use crate::error::{DomainError, DomainResult};
use crate::models::{MenuItem, OrderLineInput};
use crate::money::{line_total, to_f64};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cart entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        to_f64(line_total(self.price, self.quantity))
    }
}

impl From<&MenuItem> for CartItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity: 1,
        }
    }
}

/// Cart store
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from a saved snapshot, dropping zero-quantity entries
    /// and merging duplicate ids
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items.into_iter().filter(|i| i.quantity > 0) {
            match cart.position(&item.id) {
                Some(idx) => cart.items[idx].quantity += item.quantity,
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Insert with quantity 1, or bump the quantity of an existing id
    pub fn add(&mut self, item: impl Into<CartItem>) -> &CartItem {
        let item = item.into();
        let idx = match self.position(&item.id) {
            Some(idx) => {
                self.items[idx].quantity += 1;
                idx
            }
            None => {
                self.items.push(CartItem { quantity: 1, ..item });
                self.items.len() - 1
            }
        };
        &self.items[idx]
    }

    pub fn increment(&mut self, id: &str) -> DomainResult<u32> {
        let idx = self.require(id)?;
        self.items[idx].quantity += 1;
        Ok(self.items[idx].quantity)
    }

    /// Lower the quantity by one, removing the entry when it reaches zero.
    /// Returns the remaining quantity.
    pub fn decrement(&mut self, id: &str) -> DomainResult<u32> {
        let idx = self.require(id)?;
        if self.items[idx].quantity <= 1 {
            self.items.remove(idx);
            return Ok(0);
        }
        self.items[idx].quantity -= 1;
        Ok(self.items[idx].quantity)
    }

    pub fn remove(&mut self, id: &str) -> Option<CartItem> {
        self.position(id).map(|idx| self.items.remove(idx))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity
    pub fn total(&self) -> f64 {
        to_f64(
            self.items
                .iter()
                .map(|i| line_total(i.price, i.quantity))
                .sum::<Decimal>(),
        )
    }

    /// Sum of quantities
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checkout lines: `{product, quantity}` per entry
    pub fn order_lines(&self) -> Vec<OrderLineInput> {
        self.items
            .iter()
            .map(|i| OrderLineInput {
                product: i.id.clone(),
                quantity: i.quantity,
            })
            .collect()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    fn require(&self, id: &str) -> DomainResult<usize> {
        self.position(id)
            .ok_or_else(|| DomainError::NotInCart(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> CartItem {
        CartItem {
            id: "m1".to_string(),
            name: "Latte".to_string(),
            price: 120.0,
            image: None,
            quantity: 1,
        }
    }

    fn muffin() -> CartItem {
        CartItem {
            id: "m2".to_string(),
            name: "Muffin".to_string(),
            price: 65.5,
            image: Some("muffin.png".to_string()),
            quantity: 1,
        }
    }

    #[test]
    fn test_add_same_id_increments() {
        let mut cart = CartStore::new();
        cart.add(latte());
        cart.add(latte());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("m1").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_ignores_incoming_quantity() {
        let mut cart = CartStore::new();
        cart.add(CartItem {
            quantity: 7,
            ..latte()
        });
        assert_eq!(cart.get("m1").unwrap().quantity, 1);
    }

    #[test]
    fn test_decrement_at_one_removes() {
        let mut cart = CartStore::new();
        cart.add(latte());
        cart.add(muffin());
        cart.increment("m1").unwrap();

        assert_eq!(cart.decrement("m1").unwrap(), 1);
        assert_eq!(cart.decrement("m1").unwrap(), 0);
        assert!(cart.get("m1").is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_missing_item() {
        let mut cart = CartStore::new();
        assert_eq!(
            cart.increment("nope"),
            Err(DomainError::NotInCart("nope".to_string()))
        );
        assert!(cart.decrement("nope").is_err());
        assert!(cart.remove("nope").is_none());
    }

    #[test]
    fn test_totals_and_lines() {
        let mut cart = CartStore::new();
        cart.add(latte());
        cart.add(latte());
        cart.add(muffin());

        assert_eq!(cart.total(), 305.5);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(
            cart.order_lines(),
            vec![
                OrderLineInput { product: "m1".to_string(), quantity: 2 },
                OrderLineInput { product: "m2".to_string(), quantity: 1 },
            ]
        );

        cart.remove("m2");
        assert_eq!(cart.total(), 240.0);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_from_items_normalizes() {
        let cart = CartStore::from_items(vec![
            CartItem { quantity: 2, ..latte() },
            CartItem { quantity: 0, ..muffin() },
            CartItem { quantity: 1, ..latte() },
        ]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("m1").unwrap().quantity, 3);
    }

    #[test]
    fn test_snapshot_is_a_plain_list() {
        let mut cart = CartStore::new();
        cart.add(latte());
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        let back: CartStore = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
