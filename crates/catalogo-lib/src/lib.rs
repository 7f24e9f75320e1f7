pub mod models;
pub mod prelude;

/// Version of the wire models
pub static LIB_VERSION: &str = env!("CARGO_PKG_VERSION");
