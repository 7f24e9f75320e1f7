pub mod character;
pub mod error;
pub mod storage;
pub mod weather;
