//! Key-to-button mapping for the terminal front end.
//!
//! The calculator core speaks button events; a terminal speaks
//! characters. One typed character maps to one button press, and whole
//! key scripts are screened by a character-class check before being
//! folded, so a stray character is reported instead of silently
//! computing something else.

use lazy_static::lazy_static;
use regex::Regex;

use crate::calculator::{Event, Operator};

lazy_static! {
    /// Characters a key script may contain: digits, the operator keys
    /// and their ASCII stand-ins, the command keys, and blank filler.
    static ref KEY_SCRIPT_CHARS: Regex = Regex::new(
        r"^[0-9.+\-*/xX×÷=%nNsScCdD\s]*$"
    ).unwrap();
}

/// Map one typed character onto a button event.
///
/// Whitespace is filler for readability inside scripts and maps to
/// nothing; so does any character outside the key alphabet. Callers
/// decide whether `None` is an error.
pub fn key_event(key: char) -> Option<Event> {
    let event = match key {
        '0'..='9' | '.' => Event::Digit(key),
        '+' => Event::Op(Operator::Add),
        '-' => Event::Op(Operator::Subtract),
        '*' | 'x' | 'X' | '×' => Event::Op(Operator::Multiply),
        '/' | '÷' => Event::Op(Operator::Divide),
        '=' => Event::Equals,
        '%' => Event::Percent,
        'n' | 'N' | 's' | 'S' => Event::ToggleSign,
        'd' | 'D' => Event::Delete,
        'c' | 'C' => Event::Clear,
        _ => return None,
    };
    Some(event)
}

/// Fast pre-check that a whole script contains only key characters.
pub fn is_key_script(script: &str) -> bool {
    KEY_SCRIPT_CHARS.is_match(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_point_map_to_digit_events() {
        for key in "0123456789.".chars() {
            assert_eq!(key_event(key), Some(Event::Digit(key)), "key: {key}");
        }
    }

    #[test]
    fn test_operator_keys_and_stand_ins() {
        assert_eq!(key_event('+'), Some(Event::Op(Operator::Add)));
        assert_eq!(key_event('-'), Some(Event::Op(Operator::Subtract)));
        for key in ['*', 'x', 'X', '×'] {
            assert_eq!(key_event(key), Some(Event::Op(Operator::Multiply)));
        }
        for key in ['/', '÷'] {
            assert_eq!(key_event(key), Some(Event::Op(Operator::Divide)));
        }
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(key_event('='), Some(Event::Equals));
        assert_eq!(key_event('%'), Some(Event::Percent));
        assert_eq!(key_event('n'), Some(Event::ToggleSign));
        assert_eq!(key_event('s'), Some(Event::ToggleSign));
        assert_eq!(key_event('d'), Some(Event::Delete));
        assert_eq!(key_event('c'), Some(Event::Clear));
    }

    #[test]
    fn test_unbound_characters_map_to_nothing() {
        assert_eq!(key_event('q'), None);
        assert_eq!(key_event('('), None);
        assert_eq!(key_event(' '), None);
    }

    #[test]
    fn test_key_scripts_accepted() {
        assert!(is_key_script("12+34="));
        assert!(is_key_script("200 + 50 % ="));
        assert!(is_key_script("8/2="));
        assert!(is_key_script("5n"));
        assert!(is_key_script(""));
    }

    #[test]
    fn test_key_scripts_rejected() {
        assert!(!is_key_script("(2+3)*4"));
        assert!(!is_key_script("hello"));
        assert!(!is_key_script("2+2; rm -rf"));
    }
}
