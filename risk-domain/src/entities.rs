// Domain entities
pub mod assessment;
pub mod case;
pub mod model;
pub mod registry;
pub mod transaction;

pub use assessment::*;
pub use case::*;
pub use model::*;
pub use registry::*;
pub use transaction::*;
