//! Session store
//!
//! Tokens and profiles are kept per role under the same keys the web front
//! end uses (`customerToken`, `customerData`, `customerId`, ...). There is no
//! expiry tracking: a 401 from the backend is the only sign a token is dead.
//!
//! Checkout state (chosen order type, cart snapshot) lives in the same
//! storage but survives logins.

use crate::{ClientResult, LocalStorage};
use shared::models::{OrderType, Profile, Role};
use shared::CartStore;

/// Storage key for the checkout order type
pub const ORDER_TYPE_KEY: &str = "checkoutOrderType";
/// Storage key for the cart snapshot
pub const CART_KEY: &str = "cartItems";

/// Signed-in user for one role
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub role: Role,
    pub token: String,
    pub profile: Option<Profile>,
}

/// Session store over persistent storage
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    storage: LocalStorage,
}

impl SessionStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Record a login. Sessions of every role are dropped first so only
    /// one user is signed in at a time.
    pub fn save(&self, role: Role, token: &str, profile: &Profile) -> ClientResult<()> {
        self.clear()?;
        self.storage.set(role.token_key(), token)?;
        self.storage
            .set(role.data_key(), serde_json::to_string(profile)?)?;
        self.storage.set(role.id_key(), profile.id.as_str())?;
        tracing::debug!(role = %role, user_id = %profile.id, "Session saved");
        Ok(())
    }

    /// Replace the stored profile after a profile edit
    pub fn update_profile(&self, role: Role, profile: &Profile) -> ClientResult<()> {
        self.storage
            .set(role.data_key(), serde_json::to_string(profile)?)?;
        self.storage.set(role.id_key(), profile.id.as_str())
    }

    /// Bearer token to attach: customer, then staff, then admin
    pub fn token(&self) -> Option<String> {
        Role::LOOKUP_ORDER
            .iter()
            .find_map(|role| self.storage.get(role.token_key()))
    }

    pub fn token_for(&self, role: Role) -> Option<String> {
        self.storage.get(role.token_key())
    }

    /// Role whose token [`token`](Self::token) would attach
    pub fn active_role(&self) -> Option<Role> {
        Role::LOOKUP_ORDER
            .into_iter()
            .find(|role| self.storage.contains(role.token_key()))
    }

    pub fn session(&self, role: Role) -> Option<Session> {
        let token = self.token_for(role)?;
        Some(Session {
            role,
            token,
            profile: self.profile(role),
        })
    }

    pub fn current(&self) -> Option<Session> {
        self.active_role().and_then(|role| self.session(role))
    }

    /// Stored profile; unreadable JSON counts as absent
    pub fn profile(&self, role: Role) -> Option<Profile> {
        let raw = self.storage.get(role.data_key())?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(role = %role, error = %e, "Stored profile is not valid JSON");
                None
            }
        }
    }

    /// User id: customer, then staff, then admin
    pub fn user_id(&self) -> Option<String> {
        Role::LOOKUP_ORDER
            .iter()
            .find_map(|role| self.storage.get(role.id_key()))
    }

    /// Drop every role's session
    pub fn clear(&self) -> ClientResult<()> {
        self.storage.remove_all(
            Role::LOOKUP_ORDER
                .iter()
                .flat_map(|r| [r.token_key(), r.data_key(), r.id_key()]),
        )
    }

    // ========== Checkout state ==========

    /// Chosen order type, delivery unless set
    pub fn order_type(&self) -> OrderType {
        self.storage
            .get(ORDER_TYPE_KEY)
            .and_then(|t| t.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_order_type(&self, order_type: OrderType) -> ClientResult<()> {
        self.storage.set(ORDER_TYPE_KEY, order_type.as_str())
    }

    pub fn clear_order_type(&self) -> ClientResult<()> {
        self.storage.remove(ORDER_TYPE_KEY)
    }

    /// Saved cart, empty when missing or unreadable
    pub fn load_cart(&self) -> CartStore {
        self.storage
            .get(CART_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<shared::CartItem>>(&raw).ok())
            .map(CartStore::from_items)
            .unwrap_or_default()
    }

    pub fn save_cart(&self, cart: &CartStore) -> ClientResult<()> {
        if cart.is_empty() {
            return self.storage.remove(CART_KEY);
        }
        self.storage.set(CART_KEY, serde_json::to_string(cart)?)
    }
}
