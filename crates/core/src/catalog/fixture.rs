//! Catalog YAML fixture format

use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    catalog::{
        CatalogError,
        practitioners::{Practitioner, Service, parse_duration},
        products::Product,
    },
    prices::parse_price,
};

/// Top-level catalog document
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Practice details
    pub practice: PracticeFixture,

    /// Practitioners in display order
    pub practitioners: Vec<PractitionerFixture>,

    /// Products in display order
    #[serde(default)]
    pub products: Vec<ProductFixture>,
}

/// Practice Fixture
#[derive(Debug, Deserialize)]
pub struct PracticeFixture {
    /// Practice name
    pub name: String,

    /// Street address of the clinic
    pub location: String,

    /// IANA time zone appointments are held in
    pub time_zone: String,
}

/// Practitioner Fixture
#[derive(Debug, Deserialize)]
pub struct PractitionerFixture {
    pub slug: String,
    pub name: String,
    pub title: String,
    pub photo: String,
    #[serde(default)]
    pub specialities: SmallVec<[String; 4]>,
    pub tagline: String,
    pub services: Vec<ServiceFixture>,
}

/// Service Fixture
#[derive(Debug, Deserialize)]
pub struct ServiceFixture {
    pub name: String,

    /// Free-text duration (e.g., "60 minutes")
    pub duration: String,

    /// Price (e.g., "95.00 GBP")
    pub price: String,

    pub description: String,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub latin_name: Option<String>,
    pub category: String,
    #[serde(default)]
    pub concerns: SmallVec<[String; 4]>,
    pub short_description: String,
    pub description: String,
    pub ingredients: String,
    pub usage: String,

    /// Price (e.g., "12.50 GBP")
    pub price: String,

    pub image: String,
    #[serde(default)]
    pub recommended_by: Option<String>,
}

impl TryFrom<ServiceFixture> for Service {
    type Error = CatalogError;

    fn try_from(fixture: ServiceFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price).map_err(|source| CatalogError::Price {
            owner: fixture.name.clone(),
            source,
        })?;

        Ok(Service {
            duration_minutes: parse_duration(&fixture.duration),
            name: fixture.name,
            price,
            description: fixture.description,
        })
    }
}

impl TryFrom<PractitionerFixture> for Practitioner {
    type Error = CatalogError;

    fn try_from(fixture: PractitionerFixture) -> Result<Self, Self::Error> {
        let mut services: Vec<Service> = Vec::with_capacity(fixture.services.len());

        for service in fixture.services {
            if services.iter().any(|existing| existing.name == service.name) {
                return Err(CatalogError::DuplicateService {
                    practitioner: fixture.slug,
                    service: service.name,
                });
            }

            services.push(service.try_into()?);
        }

        Ok(Practitioner {
            slug: fixture.slug,
            name: fixture.name,
            title: fixture.title,
            photo: fixture.photo,
            specialities: fixture.specialities,
            tagline: fixture.tagline,
            services,
        })
    }
}

impl TryFrom<ProductFixture> for Product {
    type Error = CatalogError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price).map_err(|source| CatalogError::Price {
            owner: fixture.slug.clone(),
            source,
        })?;

        Ok(Product {
            slug: fixture.slug,
            name: fixture.name,
            latin_name: fixture.latin_name,
            category: fixture.category,
            concerns: fixture.concerns,
            short_description: fixture.short_description,
            description: fixture.description,
            ingredients: fixture.ingredients,
            usage: fixture.usage,
            price,
            image: fixture.image,
            recommended_by: fixture.recommended_by,
        })
    }
}
