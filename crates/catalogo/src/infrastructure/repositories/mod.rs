pub mod character;
pub mod storage;
pub mod weather;
