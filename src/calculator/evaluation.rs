//! Strict left-to-right evaluation.
//!
//! No precedence and no parentheses: `2 + 3 × 4` is 20, not 14. The
//! accumulator seeds from the first token and folds one
//! (operator, operand) pair at a time. Operands that fail to parse fold
//! in as `0.0`; only division by zero stops an evaluation.

use thiserror::Error;

use crate::calculator::token::{Operator, Token};

/// Failure of a single evaluation pass.
///
/// The `DivisionByZero` message is the exact text shown on the result
/// line.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    /// A `÷` met a right operand of exactly zero.
    #[error("Cannot be divided by 0")]
    DivisionByZero,
    /// A token sat in an operator slot without naming an operator. The
    /// buffer's alphabet cannot produce this; direct expression parsing
    /// can.
    #[error("invalid operator: {0}")]
    InvalidOperator(String),
}

/// Reduce a finalized token sequence to a single value.
///
/// The sequence must not end with a trailing operator; the session
/// guards that before calling. An empty sequence evaluates to zero.
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut iter = tokens.iter();
    let mut acc = match iter.next() {
        Some(token) => operand_value(token),
        None => return Ok(0.0),
    };

    while let Some(token) = iter.next() {
        let op = match token {
            Token::Operator(op) => *op,
            Token::Number(text) => return Err(EvalError::InvalidOperator(text.clone())),
        };
        let operand = iter.next().map(operand_value).unwrap_or(0.0);
        acc = apply(op, acc, operand)?;
    }

    Ok(acc)
}

fn apply(op: Operator, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    let value = match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            lhs / rhs
        }
    };
    Ok(value)
}

/// Operand slots are permissive: anything that does not parse is zero.
fn operand_value(token: &Token) -> f64 {
    match token {
        Token::Number(text) => text.parse().unwrap_or(0.0),
        Token::Operator(_) => 0.0,
    }
}
