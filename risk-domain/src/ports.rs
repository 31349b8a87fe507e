// Port traits (interfaces)
// Define what the domain needs from its callers and from infrastructure

pub mod lookup;
pub mod repositories;
pub mod services;

pub use lookup::*;
pub use repositories::*;
pub use services::*;
