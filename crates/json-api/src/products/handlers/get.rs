//! Get Product Handler

use herbarium::catalog::RELATED_PRODUCTS_LIMIT;
use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, products::ProductDetailResponse};

/// Get Product Handler
///
/// Returns a product with up to three related products from its category and the practitioner
/// who recommends it.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailResponse>, StatusError> {
    let catalog = depot.state_or_500()?.catalog();
    let slug = product.into_inner();

    let Some(product) = catalog.product(&slug) else {
        return Err(StatusError::not_found().brief("Product not found"));
    };

    Ok(Json(ProductDetailResponse {
        product: product.into(),
        related: catalog
            .related_products(&slug, RELATED_PRODUCTS_LIMIT)
            .into_iter()
            .map(Into::into)
            .collect(),
        recommender: catalog.recommender(product).map(Into::into),
    }))
}
