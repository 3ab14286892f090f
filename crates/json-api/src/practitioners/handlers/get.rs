//! Get Practitioner Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, practitioners::PractitionerResponse};

/// Get Practitioner Handler
///
/// Returns one practitioner by slug.
#[endpoint(tags("practitioners"), summary = "Get Practitioner")]
pub(crate) async fn handler(
    practitioner: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PractitionerResponse>, StatusError> {
    let catalog = depot.state_or_500()?.catalog();
    let slug = practitioner.into_inner();

    catalog
        .practitioner(&slug)
        .map(|practitioner| Json(practitioner.into()))
        .ok_or_else(|| StatusError::not_found().brief("Practitioner not found"))
}
