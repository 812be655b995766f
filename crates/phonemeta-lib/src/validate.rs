//! Syntactic validation of raw phone number input.
//!
//! The validator is a pure function applying a fixed rule pipeline,
//! fail-fast on the first violation:
//!
//! 1. input is non-blank after trimming surrounding whitespace,
//! 2. the trimmed value starts with `+`,
//! 3. every character after `+` is an ASCII digit,
//! 4. the digit count after `+` is between 8 and 15 inclusive,
//! 5. calling code `1` carries exactly 11 digits total (10 national digits).
//!
//! Rules after the first failure are never evaluated, so the resolver is
//! never consulted for input that fails here.

use serde::Serialize;

use crate::error::ValidationError;

/// Canonical form of a phone number: `+` followed by digits only.
///
/// Constructed exclusively by [`validate`]; holding one is proof the input
/// passed the full rule pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedNumber(String);

impl NormalizedNumber {
    /// The canonical string, e.g. `+14155552671`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// National digits after the `+`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl std::fmt::Display for NormalizedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NormalizedNumber> for String {
    fn from(value: NormalizedNumber) -> Self {
        value.0
    }
}

/// Validate a raw number string and derive its canonical form.
pub fn validate(raw: &str) -> Result<NormalizedNumber, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Missing);
    }

    let Some(digits) = trimmed.strip_prefix('+') else {
        return Err(ValidationError::MissingPlus);
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NonDigit);
    }

    let count = digits.len();
    if !(8..=15).contains(&count) {
        return Err(ValidationError::Length { digits: count });
    }

    // NANP numbers are fixed-length: country code 1 plus 10 national digits.
    if digits.starts_with('1') && count != 11 {
        return Err(ValidationError::NanpLength { digits: count });
    }

    Ok(NormalizedNumber(format!("+{digits}")))
}
