use thiserror::Error;

/// Convenient result alias for the phonemeta library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Input string failed syntactic validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Resolution of a validated number failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Syntactic validation failure for a raw number string.
///
/// One variant per validation rule, applied fail-fast in rule order. The
/// messages are user-facing and name the violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Raised when the input is absent or blank after trimming.
    #[error("Missing 'number' parameter.")]
    Missing,

    /// Raised when the trimmed input does not start with `+`.
    #[error("Phone number must start with '+' followed by country code and number.")]
    MissingPlus,

    /// Raised when a non-digit character follows the `+`.
    #[error("Phone number must contain only digits after '+'.")]
    NonDigit,

    /// Raised when the digit count after `+` falls outside 8..=15.
    #[error("Invalid phone number length. Must be between 8 and 15 digits.")]
    Length { digits: usize },

    /// Raised when a `+1` number does not carry exactly 10 national digits.
    #[error("US phone numbers must have exactly 10 digits after country code.")]
    NanpLength { digits: usize },
}

/// Resolution failure for a syntactically valid candidate.
///
/// `Unparseable` and `NoRegion` are expected, non-fatal outcomes surfaced to
/// the caller as rejections. `Internal` covers anything else and maps to a
/// server-side fault rather than a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The candidate cannot be interpreted under any known numbering plan.
    #[error("Invalid phone number format: {reason}")]
    Unparseable { reason: String },

    /// The candidate parses but maps to no specific territory.
    #[error("Unable to determine region for this number ({number}). Possible invalid or incomplete number.")]
    NoRegion { number: String },

    /// Unexpected resolver fault; not part of the rejection contract.
    #[error("internal resolver failure: {message}")]
    Internal { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_rule() {
        assert!(ValidationError::Missing.to_string().contains("number"));
        assert!(ValidationError::MissingPlus.to_string().contains('+'));
        assert!(ValidationError::NonDigit.to_string().contains("digits"));
        assert!(ValidationError::Length { digits: 3 }
            .to_string()
            .contains("between 8 and 15"));
        assert!(ValidationError::NanpLength { digits: 9 }
            .to_string()
            .contains("10 digits"));
    }

    #[test]
    fn no_region_message_includes_the_number() {
        let err = ResolveError::NoRegion {
            number: "+999555012345678".to_string(),
        };
        assert!(err.to_string().contains("+999555012345678"));
    }
}
