//! Restricted arithmetic evaluator
//!
//! Accepts numbers, `+ - * /`, unary signs and parentheses. Anything else,
//! including identifiers and function calls, is rejected before evaluation.

use crate::error::{AssistError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&(_, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value = literal.parse::<f64>().map_err(|_| {
                    AssistError::Calculation(format!("invalid number '{}'", literal))
                })?;
                tokens.push(Token::Number(value));
            }
            _ => {
                let token = match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Star,
                    '/' => Token::Slash,
                    '(' => Token::LParen,
                    ')' => Token::RParen,
                    other => {
                        return Err(AssistError::Calculation(format!(
                            "unexpected character '{}' at position {}",
                            other,
                            pos + 1
                        )))
                    }
                };
                tokens.push(token);
                chars.next();
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn expression(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.next();
            let rhs = self.term()?;
            value = if op == Token::Plus {
                value + rhs
            } else {
                value - rhs
            };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.factor()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.next();
            let rhs = self.factor()?;
            if op == Token::Star {
                value *= rhs;
            } else if rhs == 0.0 {
                return Err(AssistError::Calculation("division by zero".to_string()));
            } else {
                value /= rhs;
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Minus) => Ok(-self.factor()?),
            Some(Token::Plus) => self.factor(),
            Some(Token::LParen) => {
                let value = self.expression()?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(AssistError::Calculation("missing ')'".to_string())),
                }
            }
            Some(token) => Err(AssistError::Calculation(format!(
                "unexpected {:?}",
                token
            ))),
            None => Err(AssistError::Calculation(
                "unexpected end of expression".to_string(),
            )),
        }
    }
}

/// Evaluate an arithmetic expression
pub fn evaluate(input: &str) -> Result<f64> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(AssistError::Calculation("empty expression".to_string()));
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;

    if let Some(token) = parser.peek() {
        return Err(AssistError::Calculation(format!(
            "unexpected {:?} after end of expression",
            token
        )));
    }

    Ok(value)
}
