//! String validators with content constraints.
//!
//! This module provides [`RegexpSchema`] for pattern-constrained strings and
//! [`NumberStringSchema`] for strings that spell a number.

use regex::Regex;

use crate::path::AccessPath;
use crate::validation::ValidationContext;
use crate::value::Value;

use super::traits::Validator;

/// Accepts strings in which a regular expression finds a match.
///
/// The search is unanchored; use `^...$` to match the whole string.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
///
/// let schema = Schema::regexp(r"^\d+$").unwrap();
///
/// assert!(schema.is_valid(&Value::from("12345")));
/// assert!(!schema.is_valid(&Value::from("abc")));
/// assert!(!schema.is_valid(&Value::from(12345)));
/// ```
#[derive(Debug, Clone)]
pub struct RegexpSchema {
    regex: Regex,
}

impl RegexpSchema {
    /// Compiles `pattern`.
    ///
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Returns the pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn matches<'a>(&self, input: &'a Value) -> Option<&'a str> {
        input.as_str().filter(|s| self.regex.is_match(s))
    }
}

impl From<Regex> for RegexpSchema {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Validator for RegexpSchema {
    type Output = String;

    fn check(
        &self,
        input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        self.matches(input).is_some()
    }

    fn project(&self, input: &Value) -> Option<String> {
        self.matches(input).map(str::to_string)
    }
}

/// Accepts non-empty strings that parse to a number other than `NaN`.
///
/// Parsing follows the ECMAScript string-to-number grammar: surrounding
/// whitespace is ignored, `0b`, `0o` and `0x` prefixes select a radix, and
/// decimal literals may carry a sign, a fraction, an exponent or spell
/// `Infinity`. The string is not converted; the output is the string itself.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
///
/// let schema = Schema::number_string();
///
/// assert!(schema.is_valid(&Value::from("0b1")));
/// assert!(schema.is_valid(&Value::from("10.0")));
/// assert!(!schema.is_valid(&Value::from("0bx")));
/// assert!(!schema.is_valid(&Value::from("NaN")));
/// assert!(!schema.is_valid(&Value::from("")));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberStringSchema;

impl NumberStringSchema {
    fn accepts(input: &Value) -> Option<&str> {
        input
            .as_str()
            .filter(|s| !s.is_empty() && parse_number(s).is_some())
    }
}

impl Validator for NumberStringSchema {
    type Output = String;

    fn check(
        &self,
        input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        Self::accepts(input).is_some()
    }

    fn project(&self, input: &Value) -> Option<String> {
        Self::accepts(input).map(str::to_string)
    }
}

/// Parses `s` as an ECMAScript numeric string. `None` stands for `NaN`.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim_matches(is_ecma_whitespace);
    if s.is_empty() {
        return Some(0.0);
    }

    let bytes = s.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'b' | b'B' => Some(2),
            b'o' | b'O' => Some(8),
            b'x' | b'X' => Some(16),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_radix(&s[2..], radix);
        }
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned == "Infinity" {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !is_decimal_literal(unsigned) {
        return None;
    }
    s.parse().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// `digits [. digits] [exponent]` or `. digits [exponent]`, at least one
/// mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(at) => (&s[..at], Some(&s[at + 1..])),
        None => (s, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && all_digits(exp)
        }
    }
}

fn is_ecma_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
