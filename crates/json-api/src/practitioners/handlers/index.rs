//! Practitioner Index Handler

use salvo::prelude::*;

use crate::{extensions::*, practitioners::PractitionersResponse};

/// Practitioner Index Handler
///
/// Returns every practitioner with their services, in display order.
#[endpoint(tags("practitioners"), summary = "List Practitioners")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PractitionersResponse>, StatusError> {
    let catalog = depot.state_or_500()?.catalog();

    Ok(Json(PractitionersResponse {
        practitioners: catalog.practitioners().map(Into::into).collect(),
    }))
}
