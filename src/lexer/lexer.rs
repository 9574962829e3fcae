use crate::lexer::token::{KEYWORDS, SYMBOLS, Token};

#[derive(Debug)]
pub struct Lexer {
    buffer: String,
    index: usize,
}

impl Lexer {
    pub fn new(buffer: &str) -> Self {
        Self {
            buffer: buffer.to_string(),
            index: 0,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.advance(self.slice_buffer_while(|c| c.is_whitespace()).len());

        if self.remaining_buffer().is_empty() {
            return Token::Eof;
        }

        let current_char = self.current_char().unwrap();

        if current_char.is_ascii_digit() {
            let mut literal = self.slice_buffer_while(|c| c.is_ascii_digit()).to_string();
            self.advance(literal.len());

            // a dot directly after a digit run is a decimal point, even
            // with no digits behind it ("12." is a float literal)
            if self.remaining_buffer().starts_with('.') {
                literal.push('.');
                self.advance(1);

                let fraction = self.slice_buffer_while(|c| c.is_ascii_digit()).to_string();
                self.advance(fraction.len());
                literal.push_str(&fraction);

                return Token::Float(literal);
            }

            return Token::Integer(literal);
        }

        if current_char.is_alphabetic() {
            let literal = self.slice_buffer_while(|c| c.is_alphabetic()).to_string();
            self.advance(literal.len());

            return match KEYWORDS.iter().find(|(word, _)| *word == literal) {
                Some((_, token)) => token.clone(),
                None => Token::Illegal(literal),
            };
        }

        for symbol in SYMBOLS {
            if current_char == symbol.0 {
                self.advance(1);
                return symbol.1.clone();
            }
        }

        // unrecognized punctuation is an illegal token, not a skip
        self.advance(current_char.len_utf8());
        Token::Illegal(current_char.to_string())
    }

    fn current_char(&self) -> Option<char> {
        self.remaining_buffer().chars().next()
    }

    fn remaining_buffer(&self) -> &str {
        &self.buffer[self.index..]
    }

    fn slice_buffer_while<P: Fn(char) -> bool>(&self, predicate: P) -> &str {
        let buffer = self.remaining_buffer();
        if let Some(pos) = buffer.find(|c| !predicate(c)) {
            &buffer[..pos]
        } else {
            buffer
        }
    }

    fn advance(&mut self, n: usize) {
        self.index = (self.index + n).min(self.buffer.len());
    }
}

pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token() {
            Token::Eof => break,
            token => tokens.push(token),
        }
    }

    tokens
}
