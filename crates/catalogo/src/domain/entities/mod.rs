pub mod character;
pub mod page;
pub mod weather;
