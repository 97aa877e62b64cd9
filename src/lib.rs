pub mod parser;
pub mod rope;
