pub mod parse;
pub mod vector;
