//! Order payload serialization: the JSON interchange format a finished
//! configuration travels in at checkout, versioned so older payloads
//! stay loadable as the format evolves.

pub mod errors;
pub mod load;
pub mod metadata;
pub mod migrate;
pub mod save;
pub mod submit;

pub use errors::{LoadError, SubmitError};
pub use load::load_order;
pub use metadata::OrderMetadata;
pub use save::{save_order, OrderFile, PricedTotals, ORDER_FORMAT, ORDER_VERSION};
pub use submit::{OrderConfirmation, OrderSubmitter};
