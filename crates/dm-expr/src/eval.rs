//! Single-pass expression evaluator
//!
//! Recursive descent with one buffered lookahead token and three
//! left-associative precedence levels (comparison, sum, factor) over a
//! parenthesized atom. Subexpressions are evaluated eagerly as they are
//! parsed; no AST is built. Comparison chains do not short-circuit:
//! `1 == 1 == true` folds left to `(1 == 1) == true`.
//!
//! Re-evaluating the same text re-tokenizes from scratch. Expressions are
//! short and evaluated at authoring frequency, so nothing is cached.

use crate::error::{ExprError, ExprResult};
use crate::store::VariableStore;
use crate::token::{Token, Tokenizer};
use dm_core::Value;

/// Evaluate an expression against a variable store
///
/// Identifiers resolve through [`VariableStore::get_value`]. Fails with
/// [`ExprError`] on malformed input, including trailing garbage after a
/// complete expression; operand kind mismatches are not failures and
/// resolve to [`Value::Nil`].
pub fn evaluate(store: &dyn VariableStore, text: &str) -> ExprResult<Value> {
    let mut tokenizer = Tokenizer::new(text);
    let current = tokenizer.next_token()?;
    let mut evaluator = Evaluator {
        store,
        tokenizer,
        current,
    };

    let value = evaluator.comparison()?;
    evaluator.expect(Token::Eof)?;
    Ok(value)
}

struct Evaluator<'a> {
    store: &'a dyn VariableStore,
    tokenizer: Tokenizer<'a>,
    current: Token,
}

impl Evaluator<'_> {
    fn advance(&mut self) -> ExprResult<()> {
        self.current = self.tokenizer.next_token()?;
        Ok(())
    }

    /// Consume the current token if it matches, or fail with a syntax error
    fn expect(&mut self, expected: Token) -> ExprResult<()> {
        if self.current == expected {
            self.advance()
        } else {
            Err(ExprError::UnexpectedToken {
                expected: expected.to_string(),
                found: self.current.clone(),
            })
        }
    }

    /// comparison := sum ((== | != | < | > | <= | >=) sum)*
    fn comparison(&mut self) -> ExprResult<Value> {
        let mut value = self.sum()?;

        loop {
            match self.current {
                Token::Equals => {
                    self.advance()?;
                    let rhs = self.sum()?;
                    value = value.equals(&rhs);
                }
                Token::NotEquals => {
                    self.advance()?;
                    let rhs = self.sum()?;
                    value = value.not_equals(&rhs);
                }
                Token::Less => {
                    self.advance()?;
                    let rhs = self.sum()?;
                    value = value.less_than(&rhs);
                }
                Token::Greater => {
                    self.advance()?;
                    let rhs = self.sum()?;
                    value = value.greater_than(&rhs);
                }
                Token::LessEquals => {
                    self.advance()?;
                    let rhs = self.sum()?;
                    value = value.less_equal(&rhs);
                }
                Token::GreaterEquals => {
                    self.advance()?;
                    let rhs = self.sum()?;
                    value = value.greater_equal(&rhs);
                }
                _ => return Ok(value),
            }
        }
    }

    /// sum := factor ((+ | -) factor)*
    fn sum(&mut self) -> ExprResult<Value> {
        let mut value = self.factor()?;

        loop {
            match self.current {
                Token::Plus => {
                    self.advance()?;
                    let rhs = self.factor()?;
                    value = value.add(&rhs);
                }
                Token::Minus => {
                    self.advance()?;
                    let rhs = self.factor()?;
                    value = value.subtract(&rhs);
                }
                _ => return Ok(value),
            }
        }
    }

    /// factor := atom ((* | / | %) atom)*
    fn factor(&mut self) -> ExprResult<Value> {
        let mut value = self.atom()?;

        loop {
            match self.current {
                Token::Star => {
                    self.advance()?;
                    let rhs = self.atom()?;
                    value = value.multiply(&rhs);
                }
                Token::Slash => {
                    self.advance()?;
                    let rhs = self.atom()?;
                    value = value.divide(&rhs);
                }
                Token::Percent => {
                    self.advance()?;
                    let rhs = self.atom()?;
                    value = value.modulo(&rhs);
                }
                _ => return Ok(value),
            }
        }
    }

    /// atom := '(' comparison ')' | identifier | number | boolean | string
    fn atom(&mut self) -> ExprResult<Value> {
        match std::mem::replace(&mut self.current, Token::Eof) {
            Token::LeftParen => {
                self.advance()?;
                let value = self.comparison()?;
                self.expect(Token::RightParen)?;
                Ok(value)
            }
            Token::Identifier(name) => {
                self.advance()?;
                Ok(self.store.get_value(&name))
            }
            Token::Number(n) => {
                self.advance()?;
                Ok(Value::Number(n))
            }
            Token::Boolean(b) => {
                self.advance()?;
                Ok(Value::Boolean(b))
            }
            Token::Str(s) => {
                self.advance()?;
                Ok(Value::String(s))
            }
            other => Err(ExprError::UnexpectedToken {
                expected: "a value".to_string(),
                found: other,
            }),
        }
    }
}
