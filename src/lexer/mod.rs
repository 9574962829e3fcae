pub use lexer::{Lexer, tokenize};
pub use token::Token;

mod lexer;
mod token;
