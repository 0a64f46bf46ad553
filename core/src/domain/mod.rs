pub mod common;
pub mod generation;
pub mod ingredient;
pub mod recipe;
