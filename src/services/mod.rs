pub mod catalog;
pub mod matching;
pub mod patterns;
pub mod recommendations;
