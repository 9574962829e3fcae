use std::fmt::Display;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Dot,

    Integer(String),
    Float(String),

    Dup,
    Illegal(String),

    Eof,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::Dot => write!(f, "."),
            Token::Integer(val) => write!(f, "{val}"),
            Token::Float(val) => write!(f, "{val}"),
            Token::Dup => write!(f, "dup"),
            Token::Illegal(val) => write!(f, "{val}"),
            Token::Eof => write!(f, "EOF"),
        }
    }
}

pub const SYMBOLS: &[(char, Token)] = &[
    ('+', Token::Plus),
    ('-', Token::Minus),
    ('*', Token::Star),
    ('/', Token::Slash),
    ('^', Token::Caret),
    ('.', Token::Dot),
];

pub const KEYWORDS: &[(&str, Token)] = &[("dup", Token::Dup)];
