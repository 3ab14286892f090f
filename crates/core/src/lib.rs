//! Herbarium
//!
//! Domain core for a naturopathic herbalism practice site: the reference catalogs, the shopping
//! cart store and the appointment booking wizard.

pub mod booking;
pub mod cart;
pub mod catalog;
pub mod prelude;
pub mod prices;
