pub mod context;
pub mod lifecycle;
pub mod logging;
pub mod score_file;

pub use context::AppContext;
pub use lifecycle::run_standalone;
pub use logging::init_logging;
pub use score_file::score_file;
