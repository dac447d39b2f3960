//! Core type definitions for StoreKeep.
//!
//! This crate defines the store-agnostic types shared by the ledger, the
//! product cache and their collaborators:
//! - Product identifiers as issued by the store catalog
//! - Product metadata records returned by the remote catalog lookup
//!
//! Nothing here knows how products are bought, stored or fetched.

mod ids;
mod product;

pub use ids::ProductId;
pub use product::{ProductKind, ProductRecord};
