pub mod parse;
pub mod user;
