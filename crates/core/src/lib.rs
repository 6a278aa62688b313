//! `stockroom-core`: shared domain building blocks.
//!
//! Identifiers, the domain error model and the small traits the product and
//! inventory crates are written against. No IO lives here.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
