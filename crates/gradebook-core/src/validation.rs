//! Form input validation.
//!
//! Everything here runs before a request is issued; a failure means no
//! network effect is produced.

use std::fmt;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required field was empty after trimming. Carries the notice text.
    Missing(&'static str),
    /// A grade token was not a finite number in range.
    InvalidGrade(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Missing(prompt) => write!(f, "{prompt}"),
            InputError::InvalidGrade(token) => write!(f, "Invalid grade value: {token}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Trims `value` and fails with `prompt` when nothing is left.
pub fn required<'a>(value: &'a str, prompt: &'static str) -> Result<&'a str, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(InputError::Missing(prompt))
    } else {
        Ok(trimmed)
    }
}

/// Parses one grade, accepting only finite numbers within `[0, 100]`.
pub fn parse_grade(token: &str) -> Result<f64, InputError> {
    let trimmed = token.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && (MIN_GRADE..=MAX_GRADE).contains(&value) => Ok(value),
        _ => Err(InputError::InvalidGrade(trimmed.to_string())),
    }
}

/// Parses a comma-separated grade list. One bad token rejects the whole list.
pub fn parse_grade_list(input: &str) -> Result<Vec<f64>, InputError> {
    input.split(',').map(parse_grade).collect()
}
