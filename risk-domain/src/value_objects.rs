// Domain value objects
pub mod business_hours;
pub mod channel;
pub mod identifiers;
pub mod risk_level;
pub mod score;

pub use business_hours::*;
pub use channel::*;
pub use identifiers::*;
pub use risk_level::*;
pub use score::*;
