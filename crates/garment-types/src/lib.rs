pub mod catalog;
pub mod ids;
pub mod substate;
pub mod visual;

pub use catalog::*;
pub use ids::*;
pub use substate::*;
pub use visual::*;
