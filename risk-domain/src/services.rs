// Domain services
pub mod credit_risk;
pub mod liquidity;
pub mod routing;
pub mod scorer;

pub use credit_risk::*;
pub use liquidity::*;
pub use routing::*;
pub use scorer::*;
