pub mod catalogue;
pub mod loader;
pub mod status;
pub mod weather;
