//! Product Index Handler

use herbarium::catalog::ProductFilter;
use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{extensions::*, products::ProductsResponse};

/// Product Index Handler
///
/// Returns the products matching the shop filter. Repeat `category` or `concern` to select more
/// than one value; values within a parameter are OR'd and the two parameters are AND'd.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<Vec<String>, false>,
    concern: QueryParam<Vec<String>, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let catalog = depot.state_or_500()?.catalog();

    let filter = ProductFilter {
        categories: category.into_inner().unwrap_or_default(),
        concerns: concern.into_inner().unwrap_or_default(),
    };

    Ok(Json(ProductsResponse {
        products: catalog.filter_products(&filter).map(Into::into).collect(),
        categories: catalog.categories().into_iter().map(str::to_owned).collect(),
        concerns: catalog.concerns().into_iter().map(str::to_owned).collect(),
    }))
}
