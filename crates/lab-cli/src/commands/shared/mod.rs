pub mod input;
pub mod parse;
