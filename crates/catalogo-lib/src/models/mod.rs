pub mod character_info;
pub use character_info::*;

pub mod page_info;
pub use page_info::*;

pub mod weather_info;
pub use weather_info::*;
