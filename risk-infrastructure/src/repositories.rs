pub mod registry_files;

pub use registry_files::*;
