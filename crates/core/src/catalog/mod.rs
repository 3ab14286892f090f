//! Reference catalogs
//!
//! Practitioners, their services and the shop's products. The catalog is loaded once from YAML
//! and is read-only afterwards.

use std::collections::BTreeSet;

use jiff::{Zoned, civil::Date, tz::TimeZone};
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::prices::{PriceError, STORE_CURRENCY};

mod fixture;
pub mod practitioners;
pub mod products;

pub use practitioners::{Practitioner, PractitionerKey, Service};
pub use products::{Product, ProductFilter, ProductKey, RELATED_PRODUCTS_LIMIT};

const BUNDLED_CATALOG_YAML: &str = include_str!("../../fixtures/catalog.yml");

/// Catalog Loading Errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing error
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A price could not be parsed
    #[error("invalid price for {owner}: {source}")]
    Price {
        /// Slug or name of the entry carrying the price
        owner: String,

        /// Underlying parse failure
        #[source]
        source: PriceError,
    },

    /// Two entries share a slug
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),

    /// A practitioner lists the same service twice
    #[error("practitioner {practitioner} lists service {service} more than once")]
    DuplicateService {
        /// Practitioner slug
        practitioner: String,

        /// Repeated service name
        service: String,
    },

    /// A price is not in the store currency
    #[error("currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// A product is recommended by a practitioner that does not exist
    #[error("product {product} is recommended by unknown practitioner {practitioner}")]
    UnknownRecommender {
        /// Product slug
        product: String,

        /// Missing practitioner slug
        practitioner: String,
    },

    /// The practice time zone is not a known IANA zone
    #[error("unknown time zone {name}: {source}")]
    TimeZone {
        /// Configured zone name
        name: String,

        /// Lookup failure
        #[source]
        source: jiff::Error,
    },
}

/// The practice the site belongs to.
#[derive(Debug, Clone)]
pub struct Practice {
    /// Practice name
    pub name: String,

    /// Clinic address, used as the appointment location
    pub location: String,

    /// Time zone appointment times are expressed in
    pub time_zone: TimeZone,
}

impl Practice {
    /// The current calendar date at the practice.
    pub fn today(&self) -> Date {
        Zoned::now().with_time_zone(self.time_zone.clone()).date()
    }
}

/// Catalog
#[derive(Debug)]
pub struct Catalog {
    practice: Practice,

    practitioners: SlotMap<PractitionerKey, Practitioner>,
    practitioner_keys: FxHashMap<String, PractitionerKey>,
    practitioner_order: Vec<PractitionerKey>,

    products: SlotMap<ProductKey, Product>,
    product_keys: FxHashMap<String, ProductKey>,
    product_order: Vec<ProductKey>,

    currency: Option<&'static Currency>,
}

impl Catalog {
    /// Load the catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUNDLED_CATALOG_YAML)
    }

    /// Load a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed, if slugs repeat, if prices are invalid or
    /// in mixed currencies, or if a product references an unknown practitioner.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: fixture::CatalogFixture = serde_norway::from_str(yaml)?;

        let time_zone =
            TimeZone::get(&fixture.practice.time_zone).map_err(|source| CatalogError::TimeZone {
                name: fixture.practice.time_zone.clone(),
                source,
            })?;

        let mut catalog = Catalog {
            practice: Practice {
                name: fixture.practice.name,
                location: fixture.practice.location,
                time_zone,
            },
            practitioners: SlotMap::with_key(),
            practitioner_keys: FxHashMap::default(),
            practitioner_order: Vec::new(),
            products: SlotMap::with_key(),
            product_keys: FxHashMap::default(),
            product_order: Vec::new(),
            currency: None,
        };

        for practitioner_fixture in fixture.practitioners {
            let practitioner: Practitioner = practitioner_fixture.try_into()?;

            for service in &practitioner.services {
                catalog.check_currency(service.price.currency())?;
            }

            if catalog.practitioner_keys.contains_key(&practitioner.slug) {
                return Err(CatalogError::DuplicateSlug(practitioner.slug));
            }

            let slug = practitioner.slug.clone();
            let key = catalog.practitioners.insert(practitioner);

            catalog.practitioner_keys.insert(slug, key);
            catalog.practitioner_order.push(key);
        }

        for product_fixture in fixture.products {
            let product: Product = product_fixture.try_into()?;

            catalog.check_currency(product.price.currency())?;

            if catalog.product_keys.contains_key(&product.slug) {
                return Err(CatalogError::DuplicateSlug(product.slug));
            }

            if let Some(recommender) = &product.recommended_by
                && !catalog.practitioner_keys.contains_key(recommender)
            {
                return Err(CatalogError::UnknownRecommender {
                    product: product.slug,
                    practitioner: recommender.clone(),
                });
            }

            let slug = product.slug.clone();
            let key = catalog.products.insert(product);

            catalog.product_keys.insert(slug, key);
            catalog.product_order.push(key);
        }

        Ok(catalog)
    }

    /// Cart totals are labelled with [`STORE_CURRENCY`], so every price must use it.
    fn check_currency(&mut self, currency: &'static Currency) -> Result<(), CatalogError> {
        if currency != STORE_CURRENCY {
            return Err(CatalogError::CurrencyMismatch(
                STORE_CURRENCY.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            ));
        }

        self.currency = Some(currency);

        Ok(())
    }

    /// The practice details.
    pub fn practice(&self) -> &Practice {
        &self.practice
    }

    /// Currency shared by every catalog price, if any price was loaded.
    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }

    /// All practitioners, in fixture order.
    pub fn practitioners(&self) -> impl Iterator<Item = &Practitioner> + '_ {
        self.practitioner_order
            .iter()
            .filter_map(|key| self.practitioners.get(*key))
    }

    /// Look up a practitioner by slug.
    pub fn practitioner(&self, slug: &str) -> Option<&Practitioner> {
        self.practitioner_keys
            .get(slug)
            .and_then(|key| self.practitioners.get(*key))
    }

    /// Look up a service offered by the given practitioner.
    pub fn service(&self, practitioner: &str, name: &str) -> Option<&Service> {
        self.practitioner(practitioner)
            .and_then(|practitioner| practitioner.service(name))
    }

    /// All products, in fixture order.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.product_order
            .iter()
            .filter_map(|key| self.products.get(*key))
    }

    /// Look up a product by slug.
    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.product_keys
            .get(slug)
            .and_then(|key| self.products.get(*key))
    }

    /// Products matching the shop filter, in fixture order.
    pub fn filter_products<'a>(
        &'a self,
        filter: &'a ProductFilter,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products().filter(move |product| filter.matches(product))
    }

    /// Sorted, de-duplicated product categories.
    pub fn categories(&self) -> Vec<&str> {
        self.products()
            .map(|product| product.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted, de-duplicated product concerns.
    pub fn concerns(&self) -> Vec<&str> {
        self.products()
            .flat_map(|product| product.concerns.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Up to `limit` other products from the same category.
    pub fn related_products(&self, slug: &str, limit: usize) -> Vec<&Product> {
        let Some(product) = self.product(slug) else {
            return Vec::new();
        };

        self.products()
            .filter(|other| other.category == product.category && other.slug != product.slug)
            .take(limit)
            .collect()
    }

    /// The practitioner who recommends a product, if any.
    pub fn recommender(&self, product: &Product) -> Option<&Practitioner> {
        product
            .recommended_by
            .as_deref()
            .and_then(|slug| self.practitioner(slug))
    }
}
