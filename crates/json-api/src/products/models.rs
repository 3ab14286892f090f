//! Product Models

use herbarium::{
    catalog::{Practitioner, Product},
    prices::format_amount,
};
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// URL-friendly identifier, also the cart line item identifier
    pub slug: String,

    /// Product name
    pub name: String,

    /// Botanical name of the main herb
    pub latin_name: Option<String>,

    /// Shop category
    pub category: String,

    /// Health concerns the product is aimed at
    pub concerns: Vec<String>,

    pub short_description: String,

    pub description: String,

    pub ingredients: String,

    /// Directions for use
    pub usage: String,

    /// Price in pounds
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Price formatted for display, e.g. `£12.50`
    pub price_display: String,

    /// Image URL
    pub image: String,

    /// Slug of the recommending practitioner
    pub recommended_by: Option<String>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        let price = *product.price.amount();

        ProductResponse {
            slug: product.slug.clone(),
            name: product.name.clone(),
            latin_name: product.latin_name.clone(),
            category: product.category.clone(),
            concerns: product.concerns.to_vec(),
            short_description: product.short_description.clone(),
            description: product.description.clone(),
            ingredients: product.ingredients.clone(),
            usage: product.usage.clone(),
            price,
            price_display: format_amount(price),
            image: product.image.clone(),
            recommended_by: product.recommended_by.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Products matching the filter, in shop order
    pub products: Vec<ProductResponse>,

    /// Every category in the shop, for the filter controls
    pub categories: Vec<String>,

    /// Every concern in the shop, for the filter controls
    pub concerns: Vec<String>,
}

/// Practitioner shown as recommending a product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecommenderResponse {
    pub slug: String,
    pub name: String,
    pub title: String,
}

impl From<&Practitioner> for RecommenderResponse {
    fn from(practitioner: &Practitioner) -> Self {
        RecommenderResponse {
            slug: practitioner.slug.clone(),
            name: practitioner.name.clone(),
            title: practitioner.title.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailResponse {
    pub product: ProductResponse,

    /// Other products from the same category
    pub related: Vec<ProductResponse>,

    pub recommender: Option<RecommenderResponse>,
}
