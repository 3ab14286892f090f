//! Checkout Models

use herbarium::cart::CartLineItem;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// A cart line as sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutItemRequest {
    /// Product slug
    #[serde(alias = "slug")]
    pub product_id: String,

    pub name: String,

    /// Unit price in pounds
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Image URL shown on the payment page
    #[serde(default)]
    pub image: String,

    pub quantity: u32,
}

impl From<CheckoutItemRequest> for CartLineItem {
    fn from(item: CheckoutItemRequest) -> Self {
        CartLineItem {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            image: item.image,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequestBody {
    /// Cart lines to pay for
    #[serde(default)]
    pub items: Vec<CheckoutItemRequest>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponseBody {
    /// Hosted payment page to send the client to
    pub url: String,
}
