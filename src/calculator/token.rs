//! Expression tokens and classification.
//!
//! An expression is an ordered token list: numbers and operators strictly
//! alternating, starting with a number. Number tokens keep the exact text
//! the user typed until evaluation, so a half-finished decimal is echoed
//! verbatim instead of being reformatted under the user's fingers.

use std::fmt;
use std::str::FromStr;

use crate::calculator::evaluation::EvalError;

/// Binary operator of the calculator.
///
/// Evaluation is strictly left-to-right; there is no precedence between
/// these and no further operators exist.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol shown on the expression line.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" => Ok(Self::Multiply),
            "÷" => Ok(Self::Divide),
            _ => Err(EvalError::InvalidOperator(s.to_string())),
        }
    }
}

/// One atom of an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A number literal, kept as text until evaluation.
    Number(String),
    /// One of the four binary operators.
    Operator(Operator),
}

impl Token {
    /// Check if this token is an operator.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }
}

/// Check if a token string reads as a finite decimal number.
///
/// Sign and decimal point are optional and an exponent is tolerated.
/// `inf`/`NaN` spellings parse as floats but are not calculator numbers,
/// so finiteness is part of the check.
pub fn is_numeric_token(s: &str) -> bool {
    s.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

/// Parse a space-joined expression string into a token list.
///
/// Even slots are taken verbatim as number text; malformed operands stay
/// in the list and later fold in as zero. Odd slots must name one of the
/// four operators.
pub fn parse_expression(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    for (i, word) in input.split_whitespace().enumerate() {
        if i % 2 == 0 {
            tokens.push(Token::Number(word.to_string()));
        } else {
            tokens.push(Token::Operator(word.parse()?));
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols_round_trip() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(op.symbol().to_string().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn test_ascii_stand_ins_are_not_operators() {
        // The key map translates these; the token layer does not.
        assert!("*".parse::<Operator>().is_err());
        assert!("/".parse::<Operator>().is_err());
    }

    #[test]
    fn test_numeric_tokens() {
        assert!(is_numeric_token("5"));
        assert!(is_numeric_token("-3.25"));
        assert!(is_numeric_token("0.5"));
        assert!(is_numeric_token("1e3"));
    }

    #[test]
    fn test_non_numeric_tokens() {
        assert!(!is_numeric_token(""));
        assert!(!is_numeric_token("."));
        assert!(!is_numeric_token("-"));
        assert!(!is_numeric_token("1.2.3"));
        assert!(!is_numeric_token("abc"));
        assert!(!is_numeric_token("inf"));
        assert!(!is_numeric_token("NaN"));
    }

    #[test]
    fn test_parse_expression() {
        let tokens = parse_expression("2 + 3 × 4").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number("2".into()),
                Token::Operator(Operator::Add),
                Token::Number("3".into()),
                Token::Operator(Operator::Multiply),
                Token::Number("4".into()),
            ]
        );
    }

    #[test]
    fn test_parse_expression_rejects_unknown_operator() {
        let err = parse_expression("2 $ 3").unwrap_err();
        assert_eq!(err, EvalError::InvalidOperator("$".to_string()));
    }

    #[test]
    fn test_parse_expression_keeps_malformed_operands() {
        // Operand slots are permissive; the evaluator coerces later.
        let tokens = parse_expression("1.2.3 + 4").unwrap();
        assert_eq!(tokens[0], Token::Number("1.2.3".into()));
    }

    #[test]
    fn test_parse_expression_empty() {
        assert!(parse_expression("   ").unwrap().is_empty());
    }
}
