//! The option catalog: every customization axis a product offers, the
//! selectable values with their price deltas and visual attributes, and
//! the explicit part table that maps selections to named model parts.
//!
//! Read-only at runtime. Population happens through [`CatalogSource`]
//! or [`load::load_catalog`]; lookups never mutate.

pub mod catalog;
pub mod errors;
pub mod load;
pub mod part_table;
pub mod source;

pub use catalog::OptionCatalog;
pub use errors::CatalogError;
pub use load::{load_catalog, CATALOG_FORMAT, CATALOG_VERSION};
pub use part_table::{PartTable, PartTableEntry};
pub use source::CatalogSource;
