use core::fmt;
use std::io::{self, Write};

use crate::lexer::Token;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("operator '{0}' requires two numerical arguments")]
    MissingOperands(char),

    #[error("cannot divide by 0")]
    DivisionByZero,

    #[error("0^0 is undefined")]
    UndefinedPower,

    #[error("one parameter is needed for dup")]
    MissingDupOperand,

    #[error("number '{0}' is out of range")]
    NumberOutOfRange(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl Value {
    fn as_f64(self) -> f64 {
        match self {
            Value::Integer(n) => n as f64,
            Value::Float(x) => x,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Value::Integer(n) => n == 0,
            Value::Float(x) => x == 0.0,
        }
    }

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_add(b) {
                Some(n) => Value::Integer(n),
                None => Value::Float(a as f64 + b as f64),
            },
            (a, b) => Value::Float(a.as_f64() + b.as_f64()),
        }
    }

    fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_sub(b) {
                Some(n) => Value::Integer(n),
                None => Value::Float(a as f64 - b as f64),
            },
            (a, b) => Value::Float(a.as_f64() - b.as_f64()),
        }
    }

    fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_mul(b) {
                Some(n) => Value::Integer(n),
                None => Value::Float(a as f64 * b as f64),
            },
            (a, b) => Value::Float(a.as_f64() * b.as_f64()),
        }
    }

    fn pow(self, exp: Self) -> Self {
        match (self, exp) {
            (Value::Integer(base), Value::Integer(exp)) if exp >= 0 => {
                match u32::try_from(exp).ok().and_then(|e| base.checked_pow(e)) {
                    Some(n) => Value::Integer(n),
                    None => Value::Float((base as f64).powf(exp as f64)),
                }
            }
            (base, exp) => Value::Float(base.as_f64().powf(exp.as_f64())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
        }
    }
}

pub fn evaluate<W: Write>(tokens: &[Token], stack: &mut Vec<Value>, out: &mut W) -> Result<()> {
    for token in tokens {
        match token {
            Token::Integer(literal) => {
                let n = literal
                    .parse()
                    .map_err(|_| Error::NumberOutOfRange(literal.clone()))?;
                stack.push(Value::Integer(n));
            }

            Token::Float(literal) => {
                let x = literal
                    .parse()
                    .map_err(|_| Error::NumberOutOfRange(literal.clone()))?;
                stack.push(Value::Float(x));
            }

            Token::Plus => {
                let (n1, n2) = pop_operands(stack, '+')?;
                stack.push(n1.add(n2));
            }

            Token::Minus => {
                let (n1, n2) = pop_operands(stack, '-')?;
                stack.push(n1.sub(n2));
            }

            Token::Star => {
                let (n1, n2) = pop_operands(stack, '*')?;
                stack.push(n1.mul(n2));
            }

            Token::Slash => {
                let (n1, n2) = pop_operands(stack, '/')?;
                if n2.is_zero() {
                    return Err(Error::DivisionByZero);
                }
                stack.push(Value::Float(n1.as_f64() / n2.as_f64()));
            }

            Token::Caret => {
                let (n1, n2) = pop_operands(stack, '^')?;
                if n1.is_zero() && n2.is_zero() {
                    return Err(Error::UndefinedPower);
                }
                stack.push(n1.pow(n2));
            }

            Token::Dot => {
                if let Some(value) = stack.pop() {
                    writeln!(out, "{value}")?;
                }
            }

            Token::Dup => match stack.last().copied() {
                Some(value) => stack.push(value),
                None => return Err(Error::MissingDupOperand),
            },

            Token::Illegal(literal) => {
                writeln!(out, "Got illegal token: {literal}")?;
            }

            Token::Eof => break,
        }
    }

    Ok(())
}

fn pop_operands(stack: &mut Vec<Value>, op: char) -> Result<(Value, Value)> {
    if stack.len() < 2 {
        return Err(Error::MissingOperands(op));
    }

    let n2 = stack.pop().unwrap();
    let n1 = stack.pop().unwrap();
    Ok((n1, n2))
}
