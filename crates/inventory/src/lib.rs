//! Inventory domain module.
//!
//! The ordered, in-memory product store the console works against. Plain
//! synchronous state: one owner, no locking, nothing persisted.

pub mod store;

pub use store::{IdPolicy, Inventory};
