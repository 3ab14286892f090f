//! Cart store

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use tracing::{debug, warn};

use crate::{
    cart::{CartLineItem, CartStorage, NewLineItem},
    prices::STORE_CURRENCY,
};

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "herbarium-cart";

/// The shopping basket.
///
/// All mutation goes through named methods, and each one that changes the cart writes the full
/// item list back to storage. Storage failures are logged and otherwise ignored: the in-memory
/// items stay authoritative.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<CartLineItem>,
    storage: S,
    key: String,
}

impl<S: CartStorage> CartStore<S> {
    /// Restore the cart saved under [`CART_STORAGE_KEY`].
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, CART_STORAGE_KEY)
    }

    /// Restore the cart saved under `key`.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty cart. Loading never writes.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let items = match storage.read(&key) {
            Ok(Some(snapshot)) => parse_snapshot(&key, &snapshot),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = %key, error = %err, "failed to read saved cart, starting empty");

                Vec::new()
            }
        };

        debug!(key = %key, lines = items.len(), "cart loaded");

        CartStore {
            items,
            storage,
            key,
        }
    }

    /// Add one unit of a product, creating the line if needed.
    pub fn add_item(&mut self, item: impl Into<NewLineItem>) {
        let item = item.into();

        match self
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(item.with_quantity(1)),
        }

        self.persist();
    }

    /// Remove a line. Absent ids are ignored.
    pub fn remove_item(&mut self, product_id: &str) {
        let before = self.items.len();

        self.items.retain(|line| line.product_id != product_id);

        if self.items.len() != before {
            self.persist();
        }
    }

    /// Set a line's quantity. Zero or below removes the line; absent ids are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);

            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
        else {
            return;
        };

        if line.quantity != quantity {
            line.quantity = quantity;

            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();

        self.persist();
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price times quantity over all lines.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// [`Self::total_price`] in the store currency.
    pub fn subtotal(&self) -> Money<'static, Currency> {
        Money::from_decimal(self.total_price(), STORE_CURRENCY)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Look up a line by product id.
    pub fn get(&self, product_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.product_id == product_id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let snapshot = match serde_json::to_string(&self.items) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to serialize cart");

                return;
            }
        };

        if let Err(err) = self.storage.write(&self.key, &snapshot) {
            warn!(key = %self.key, error = %err, "failed to save cart");
        }
    }
}

fn parse_snapshot(key: &str, snapshot: &str) -> Vec<CartLineItem> {
    let lines: Vec<CartLineItem> = match serde_json::from_str(snapshot) {
        Ok(lines) => lines,
        Err(err) => {
            warn!(key = %key, error = %err, "saved cart is malformed, starting empty");

            return Vec::new();
        }
    };

    if lines.iter().any(|line| line.price.is_sign_negative() && !line.price.is_zero()) {
        warn!(key = %key, "saved cart has a negative price, starting empty");

        return Vec::new();
    }

    let mut items: Vec<CartLineItem> = Vec::with_capacity(lines.len());
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for line in lines {
        if line.quantity == 0 {
            continue;
        }

        match positions.get(&line.product_id) {
            Some(&index) => {
                if let Some(existing) = items.get_mut(index) {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
            }
            None => {
                positions.insert(line.product_id.clone(), items.len());
                items.push(line);
            }
        }
    }

    items
}
