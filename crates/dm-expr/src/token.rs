//! Expression tokenizer
//!
//! Single-pass, longest-match-first scanning over the remaining input
//! suffix. Two-character operators are matched before their one-character
//! prefixes, and the keywords `true`/`false` are recognized only at word
//! boundaries, so `true1` is the identifier `true1` rather than a boolean
//! followed by a number.

use crate::error::{ExprError, ExprResult};
use std::fmt;

/// A lexical token of the expression language
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Identifier(String),
    Number(f64),
    Boolean(bool),
    Str(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LeftParen,
    RightParen,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "identifier '{name}'"),
            Token::Number(n) => write!(f, "number {n}"),
            Token::Boolean(b) => write!(f, "boolean {b}"),
            Token::Str(s) => write!(f, "string \"{s}\""),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::Percent => f.write_str("'%'"),
            Token::LeftParen => f.write_str("'('"),
            Token::RightParen => f.write_str("')'"),
            Token::Equals => f.write_str("'=='"),
            Token::NotEquals => f.write_str("'!='"),
            Token::Less => f.write_str("'<'"),
            Token::Greater => f.write_str("'>'"),
            Token::LessEquals => f.write_str("'<='"),
            Token::GreaterEquals => f.write_str("'>='"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

/// Two-character operators, matched before their one-character prefixes
const TWO_CHAR_OPERATORS: [(&str, Token); 4] = [
    ("==", Token::Equals),
    ("!=", Token::NotEquals),
    ("<=", Token::LessEquals),
    (">=", Token::GreaterEquals),
];

/// Single-character operators and punctuation
const ONE_CHAR_OPERATORS: [(char, Token); 9] = [
    ('+', Token::Plus),
    ('-', Token::Minus),
    ('*', Token::Star),
    ('/', Token::Slash),
    ('%', Token::Percent),
    ('(', Token::LeftParen),
    (')', Token::RightParen),
    ('<', Token::Less),
    ('>', Token::Greater),
];

/// Streaming tokenizer over an expression string
///
/// Lives for a single parse; [`Tokenizer::next_token`] yields `Token::Eof`
/// once the input is exhausted and keeps yielding it thereafter.
pub struct Tokenizer<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            offset: 0,
        }
    }

    fn bump(&mut self, len: usize) {
        self.rest = &self.rest[len..];
        self.offset += len;
    }

    /// Scan the next token off the front of the remaining input
    pub fn next_token(&mut self) -> ExprResult<Token> {
        let trimmed = self.rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        self.offset += self.rest.len() - trimmed.len();
        self.rest = trimmed;

        let Some(first) = self.rest.chars().next() else {
            return Ok(Token::Eof);
        };

        for (text, token) in &TWO_CHAR_OPERATORS {
            if self.rest.starts_with(text) {
                self.bump(text.len());
                return Ok(token.clone());
            }
        }

        for (ch, token) in &ONE_CHAR_OPERATORS {
            if first == *ch {
                self.bump(first.len_utf8());
                return Ok(token.clone());
            }
        }

        if first.is_ascii_alphabetic() || first == '_' {
            return Ok(self.scan_word());
        }

        if first == '"' {
            return self.scan_string();
        }

        if first.is_ascii_digit() {
            return self.scan_number(first);
        }

        Err(ExprError::UnexpectedChar {
            ch: first,
            position: self.offset,
        })
    }

    /// Scan an identifier or keyword: `[A-Za-z_][A-Za-z0-9_]*`
    fn scan_word(&mut self) -> Token {
        let end = self
            .rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(self.rest.len());
        let word = &self.rest[..end];

        let token = match word {
            "true" => Token::Boolean(true),
            "false" => Token::Boolean(false),
            _ => Token::Identifier(word.to_string()),
        };
        self.bump(end);
        token
    }

    /// Scan a quoted string literal. No escape sequences: the first `"`
    /// after the opening quote closes the literal.
    fn scan_string(&mut self) -> ExprResult<Token> {
        match self.rest[1..].find('"') {
            Some(len) => {
                let literal = self.rest[1..1 + len].to_string();
                self.bump(len + 2);
                Ok(Token::Str(literal))
            }
            None => Err(ExprError::UnterminatedString),
        }
    }

    /// Scan a numeric literal: digits with at most one decimal point
    fn scan_number(&mut self, first: char) -> ExprResult<Token> {
        let mut seen_dot = false;
        let end = self
            .rest
            .find(|c: char| {
                if c.is_ascii_digit() {
                    false
                } else if c == '.' && !seen_dot {
                    seen_dot = true;
                    false
                } else {
                    true
                }
            })
            .unwrap_or(self.rest.len());

        let number = self.rest[..end].parse::<f64>().map_err(|_| {
            ExprError::UnexpectedChar {
                ch: first,
                position: self.offset,
            }
        })?;
        self.bump(end);
        Ok(Token::Number(number))
    }
}
