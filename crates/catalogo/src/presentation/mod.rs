pub mod cards;
pub mod terminal;
