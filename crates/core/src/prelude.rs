//! Herbarium prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    booking::{
        BookingSelection, BookingStep, BookingSummary, BookingWizard, ContactDetails,
        SelectionError, StepRejection, TimeSlot, is_slot_available,
    },
    cart::{
        CART_STORAGE_KEY, CartLineItem, CartStorage, CartStore, FileStorage, MemoryStorage,
        NewLineItem, StorageError,
    },
    catalog::{
        Catalog, CatalogError, Practice, Practitioner, Product, ProductFilter, Service,
    },
    prices::{PriceError, STORE_CURRENCY, format_amount, parse_price, to_minor_units},
};
