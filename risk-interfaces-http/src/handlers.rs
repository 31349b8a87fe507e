pub mod ops_handlers;
pub mod registry_handlers;
pub mod risk_model_handlers;
pub mod score_handlers;

pub use ops_handlers::*;
pub use registry_handlers::*;
pub use risk_model_handlers::*;
pub use score_handlers::*;
