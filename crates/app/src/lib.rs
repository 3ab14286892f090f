//! Herbarium application services: checkout, calendar export and the shared application context.

pub mod calendar;
pub mod checkout;
pub mod context;
