pub mod catalogue;
pub mod favorites;
pub mod pager;
pub mod search;
