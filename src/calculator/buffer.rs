//! The mutable "expression so far".
//!
//! Owns the ordered token list and the edits the buttons drive: append a
//! digit, delete backwards, set or replace the trailing operator, flip
//! the sign of the last operand, take its percentage. Tokens strictly
//! alternate number, operator, number, …; at most one trailing operator
//! exists at any time.

use crate::calculator::token::{Operator, Token, is_numeric_token};

/// Expression under construction, token by token.
///
/// The string form exists only for the display echo; every edit operates
/// on the token list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionBuffer {
    tokens: Vec<Token>,
}

impl ExpressionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// True when the expression awaits its right operand.
    pub fn has_trailing_operator(&self) -> bool {
        matches!(self.tokens.last(), Some(Token::Operator(_)))
    }

    /// True when at least one operator token is present. A leading minus
    /// on a signed number is part of the number, not an operator.
    pub fn contains_operator(&self) -> bool {
        self.tokens.iter().any(Token::is_operator)
    }

    /// Append a digit or the decimal point.
    ///
    /// Extends the trailing number, or starts a fresh one after an
    /// operator. A buffer holding just `"0"` is replaced rather than
    /// extended, so `0` then `5` reads `5`. Repeated decimal points are
    /// not rejected here; such a token simply never evaluates to
    /// anything but zero.
    pub fn append_digit(&mut self, d: char) {
        let lone_token = self.tokens.len() == 1;
        match self.tokens.last_mut() {
            Some(Token::Number(text)) => {
                if lone_token && text.as_str() == "0" && d != '.' {
                    *text = d.to_string();
                } else {
                    text.push(d);
                }
            }
            _ => self.tokens.push(Token::Number(d.to_string())),
        }
    }

    /// Delete backwards by one step.
    ///
    /// A trailing operator is removed whole, so the deletion always
    /// lands back on a number token, never on a dangling separator. A
    /// trailing number loses its last character, and the token itself
    /// once its text empties. No-op on an empty buffer.
    pub fn delete_last(&mut self) {
        match self.tokens.last_mut() {
            Some(Token::Operator(_)) => {
                self.tokens.pop();
            }
            Some(Token::Number(text)) => {
                text.pop();
                if text.is_empty() {
                    self.tokens.pop();
                }
            }
            None => {}
        }
    }

    /// Set or replace the trailing operator.
    ///
    /// Repeated operator presses replace the pending operator instead of
    /// stacking. An empty buffer is left alone; the session seeds it
    /// from the last result instead.
    pub fn set_operator(&mut self, op: Operator) {
        match self.tokens.last_mut() {
            Some(Token::Operator(pending)) => *pending = op,
            Some(Token::Number(_)) => self.tokens.push(Token::Operator(op)),
            None => {}
        }
    }

    /// Replace the whole expression with a committed result.
    pub fn reset_to(&mut self, result: &str) {
        self.tokens.clear();
        self.tokens.push(Token::Number(result.to_string()));
    }

    /// Seed the buffer from a previous result, ready for the next
    /// right-hand operand: `"<result> <op> "`.
    pub fn resume_from(&mut self, result: &str, op: Operator) {
        self.tokens.clear();
        self.tokens.push(Token::Number(result.to_string()));
        self.tokens.push(Token::Operator(op));
    }

    /// Flip the sign of the trailing number.
    ///
    /// Anything that does not read as a number (a pending operator, a
    /// half-typed decimal) is left untouched.
    pub fn toggle_sign(&mut self) {
        if let Some(Token::Number(text)) = self.tokens.last_mut()
            && is_numeric_token(text)
        {
            if let Some(stripped) = text.strip_prefix('-') {
                *text = stripped.to_string();
            } else {
                text.insert(0, '-');
            }
        }
    }

    /// Replace the trailing number with its hundredth.
    ///
    /// This is the only place percentages are normalized; the evaluator
    /// never sees a percent token. The rewritten value uses the default
    /// float rendering; width clamping happens at display time, not
    /// here.
    pub fn apply_percent(&mut self) {
        if let Some(Token::Number(text)) = self.tokens.last_mut()
            && let Ok(value) = text.parse::<f64>()
        {
            *text = (value / 100.0).to_string();
        }
    }

    /// The expression line echo. Tokens are space separated and a
    /// pending operator keeps a trailing space while it awaits its
    /// operand.
    pub fn to_display_string(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match token {
                Token::Number(text) => out.push_str(text),
                Token::Operator(op) => out.push(op.symbol()),
            }
        }
        if self.has_trailing_operator() {
            out.push(' ');
        }
        out
    }
}
