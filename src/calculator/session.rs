//! The two-line session state machine.
//!
//! Two observable states: editing, where the result line carries a live
//! preview, and showing a committed result, where the expression echo is
//! cleared. Every button event runs the full mutate → recompute → render
//! cycle to completion before the next one is accepted; the state is
//! owned here and nowhere else.

use tracing::debug;

use crate::calculator::buffer::ExpressionBuffer;
use crate::calculator::evaluation::{EvalError, evaluate};
use crate::calculator::format::{MAX_DISPLAY_DIGITS, format_number};
use crate::calculator::token::Operator;

/// A button event delivered by the front end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// `'0'..='9'` or `'.'`.
    Digit(char),
    Op(Operator),
    Equals,
    Clear,
    Delete,
    ToggleSign,
    Percent,
}

/// What the two display lines show after an event.
///
/// Rendering is idempotent: the same state always yields the same frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayFrame {
    /// The expression echo line.
    pub expression: String,
    /// The live preview, committed result, or error line.
    pub result: String,
}

/// One calculator session: the expression under edit, the last committed
/// result, and which of the two display modes is active.
#[derive(Clone, Debug)]
pub struct Session {
    buffer: ExpressionBuffer,
    last_result: Option<String>,
    result_displayed: bool,
    max_digits: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MAX_DISPLAY_DIGITS)
    }
}

impl Session {
    pub fn new(max_digits: usize) -> Self {
        Self {
            buffer: ExpressionBuffer::new(),
            last_result: None,
            result_displayed: false,
            max_digits,
        }
    }

    /// True while a committed result owns the result line.
    pub fn is_showing_result(&self) -> bool {
        self.result_displayed
    }

    /// Fold one button event into the state and return the refreshed
    /// display frame.
    pub fn press(&mut self, event: Event) -> DisplayFrame {
        debug!(?event, "button event");
        match event {
            Event::Digit(d) => {
                // The first digit after a committed result starts a
                // brand-new expression.
                if self.result_displayed {
                    self.buffer.clear();
                    self.result_displayed = false;
                }
                self.buffer.append_digit(d);
            }
            Event::Op(op) => {
                if self.buffer.is_empty() {
                    if let Some(last) = self.last_result.as_deref() {
                        self.buffer.resume_from(last, op);
                    }
                } else {
                    self.buffer.set_operator(op);
                }
                self.result_displayed = false;
            }
            Event::ToggleSign => {
                self.buffer.toggle_sign();
                self.result_displayed = false;
            }
            Event::Percent => {
                self.buffer.apply_percent();
                self.result_displayed = false;
            }
            Event::Delete => {
                if self.result_displayed {
                    self.buffer.clear();
                    self.result_displayed = false;
                } else {
                    self.buffer.delete_last();
                }
            }
            Event::Equals => self.commit(),
            Event::Clear => {
                self.buffer.clear();
                self.last_result = None;
                self.result_displayed = false;
            }
        }
        self.render()
    }

    /// Equals: evaluate and commit, or do nothing when the expression is
    /// not ready. A division by zero commits nothing and leaves the
    /// expression editable; the render pass surfaces the message.
    fn commit(&mut self) {
        if self.result_displayed {
            // Already committed; the echo line stays cleared.
            return;
        }
        if self.buffer.is_empty()
            || self.buffer.has_trailing_operator()
            || !self.buffer.contains_operator()
        {
            return;
        }
        match evaluate(self.buffer.tokens()) {
            Ok(value) => {
                let result = format_number(value, self.max_digits);
                debug!(%result, "committed result");
                self.buffer.reset_to(&result);
                self.last_result = Some(result);
                self.result_displayed = true;
            }
            Err(EvalError::DivisionByZero) => {
                debug!("division by zero, nothing committed");
            }
            Err(_) => {}
        }
    }

    /// Render the current state as the two display lines.
    pub fn render(&self) -> DisplayFrame {
        if self.result_displayed {
            return DisplayFrame {
                expression: String::new(),
                result: self.last_result.clone().unwrap_or_default(),
            };
        }
        DisplayFrame {
            expression: self.buffer.to_display_string(),
            result: self.preview(),
        }
    }

    /// The tentative result shown while editing.
    ///
    /// Blank until the expression has both operands of at least one
    /// operator; division by zero shows its message here, any other
    /// evaluation failure stays blank.
    fn preview(&self) -> String {
        if self.buffer.is_empty()
            || self.buffer.has_trailing_operator()
            || !self.buffer.contains_operator()
        {
            return String::new();
        }
        match evaluate(self.buffer.tokens()) {
            Ok(value) => format_number(value, self.max_digits),
            Err(err @ EvalError::DivisionByZero) => err.to_string(),
            Err(_) => String::new(),
        }
    }
}
