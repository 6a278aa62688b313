//! Products domain module.
//!
//! The catalog item model: base fields shared by every product plus the
//! perishable / non-perishable variant and its description renderer. Pure
//! domain logic (no IO, no storage).

pub mod product;

pub use product::{ExpiryDate, Product, ProductKind, WarrantyPeriod};
