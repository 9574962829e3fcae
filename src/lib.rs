pub mod error;
pub mod eval;
pub mod lexer;
