//! Browsable category catalog.
//!
//! * [`CategoryCatalog`]: immutable snapshot of categories and their items
//! * [`CatalogRegistry`]: atomically reloadable handle
//! * [`CustomEntries`]: persisted user additions, validated per category

pub mod catalog;
pub mod custom;
pub mod registry;
#[cfg(test)]
mod tests;

pub use catalog::{Category, CategoryCatalog};
pub use custom::{CustomEntries, CustomEntry, CustomRejection};
pub use registry::CatalogRegistry;
