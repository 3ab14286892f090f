//! Shopping cart
//!
//! [`CartStore`] owns the line items and is the only way to change them. Every change is mirrored
//! to a [`CartStorage`] backend under a single key.

mod line_item;
mod storage;
mod store;

pub use line_item::{CartLineItem, NewLineItem};
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{CART_STORAGE_KEY, CartStore};
