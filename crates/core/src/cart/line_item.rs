//! Cart line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// One product-and-quantity pair in the cart.
///
/// This is also the persisted and wire shape: `{"productId", "name", "price", "image", "quantity"}`.
/// The price is a JSON number unless `f64` cannot hold it exactly, in which case it is a decimal
/// string; both forms are read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product identifier; unique within a cart
    #[serde(alias = "slug")]
    pub product_id: String,

    /// Display name
    pub name: String,

    /// Unit price
    #[serde(with = "exact_price")]
    pub price: Decimal,

    /// Image URL
    pub image: String,

    /// Number of units; never zero while the item is in a cart
    pub quantity: u32,
}

mod exact_price {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        price: &Decimal,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let exact_float = f64::from_str(&price.to_string()).ok().filter(|float| {
            Decimal::from_str(&float.to_string()).is_ok_and(|read_back| read_back == *price)
        });

        match exact_float {
            Some(float) => serializer.serialize_f64(float),
            None => serializer.collect_str(price),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Decimal, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer)
    }
}

impl CartLineItem {
    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A product about to be added to the cart; a line item without a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    /// Product identifier
    pub product_id: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Image URL
    pub image: String,
}

impl NewLineItem {
    pub(crate) fn with_quantity(self, quantity: u32) -> CartLineItem {
        CartLineItem {
            product_id: self.product_id,
            name: self.name,
            price: self.price,
            image: self.image,
            quantity,
        }
    }
}

impl From<&Product> for NewLineItem {
    fn from(product: &Product) -> Self {
        NewLineItem {
            product_id: product.slug.clone(),
            name: product.name.clone(),
            price: *product.price.amount(),
            image: product.image.clone(),
        }
    }
}
