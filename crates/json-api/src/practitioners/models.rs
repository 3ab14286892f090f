//! Practitioner Models

use herbarium::{
    catalog::{Practitioner, Service},
    prices::format_amount,
};
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// A bookable consultation type.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceResponse {
    /// Service name, unique per practitioner
    pub name: String,

    /// Appointment length in minutes
    pub duration_minutes: u32,

    /// Human readable appointment length
    pub duration: String,

    /// Price in pounds
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Price formatted for display, e.g. `£95.00`
    pub price_display: String,

    /// Longer description
    pub description: String,
}

impl From<&Service> for ServiceResponse {
    fn from(service: &Service) -> Self {
        let price = *service.price.amount();

        ServiceResponse {
            name: service.name.clone(),
            duration_minutes: service.duration_minutes,
            duration: service.duration_label(),
            price,
            price_display: format_amount(price),
            description: service.description.clone(),
        }
    }
}

/// A herbalist and the services they offer.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PractitionerResponse {
    /// URL-friendly identifier, also the booking deep-link value
    pub slug: String,

    /// Display name
    pub name: String,

    /// Professional title
    pub title: String,

    /// Profile photo URL
    pub photo: String,

    /// Areas of speciality
    pub specialities: Vec<String>,

    /// One-line summary
    pub tagline: String,

    /// Services in display order
    pub services: Vec<ServiceResponse>,
}

impl From<&Practitioner> for PractitionerResponse {
    fn from(practitioner: &Practitioner) -> Self {
        PractitionerResponse {
            slug: practitioner.slug.clone(),
            name: practitioner.name.clone(),
            title: practitioner.title.clone(),
            photo: practitioner.photo.clone(),
            specialities: practitioner.specialities.to_vec(),
            tagline: practitioner.tagline.clone(),
            services: practitioner.services.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PractitionersResponse {
    /// Practitioners in display order
    pub practitioners: Vec<PractitionerResponse>,
}
