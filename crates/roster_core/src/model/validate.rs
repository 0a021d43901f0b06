//! Input validation for user fields.
//!
//! # Responsibility
//! - Check raw prompt input and report enumerated failure reasons.
//! - Keep retry loops with the caller; validators never block or mutate.
//!
//! # Invariants
//! - Input is taken verbatim; no trimming or normalization is applied.
//! - Age bounds are inclusive on both ends.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest age accepted by the roster.
pub const MIN_AGE: i64 = 0;
/// Highest age accepted by the roster.
pub const MAX_AGE: i64 = 150;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{L}+$").expect("valid name regex"));

/// Enumerated reason an input value was rejected.
///
/// The `Display` text doubles as the inline feedback shown at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty where a value is required.
    EmptyInput,
    /// Name contains a character outside the letters-only alphabet.
    InvalidChars,
    /// Age input is not parseable as an integer.
    NotANumber,
    /// Age parses but falls outside the inclusive window.
    OutOfRange,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "input cannot be empty"),
            Self::InvalidChars => write!(f, "name can only contain letters"),
            Self::NotANumber => write!(f, "age must be a number"),
            Self::OutOfRange => write!(f, "age must be between {MIN_AGE} and {MAX_AGE}"),
        }
    }
}

impl Error for ValidationError {}

/// Checks a raw name input against the letters-only alphabet.
///
/// Any Unicode letter is accepted; spaces, digits, hyphens and punctuation
/// are not.
pub fn validate_name(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if !NAME_RE.is_match(input) {
        return Err(ValidationError::InvalidChars);
    }
    Ok(())
}

/// Parses a raw age input into a bounded value.
///
/// Parsing happens before the bounds check, so `"-1"` reports out-of-range
/// rather than not-a-number.
pub fn validate_age(input: &str) -> Result<u8, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let age: i64 = input.parse().map_err(|_| ValidationError::NotANumber)?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange);
    }
    Ok(age as u8)
}
