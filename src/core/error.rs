use thiserror::Error;

/// Errors that can occur while validating or generating test numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NummerError {
    /// Input does not match the positional grammar (length or charset).
    #[error("malformed input '{value}': {reason}")]
    Malformed {
        /// The rejected input, after normalization.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Input is well-formed but its check digits do not add up.
    #[error("checksum mismatch for '{value}'")]
    ChecksumMismatch {
        /// The rejected input, after normalization.
        value: String,
    },

    /// Bank code outside the fixed set of Dutch bank codes.
    #[error("invalid bank code '{0}', expected one of ABNA, INGB, RABO, SNSB, TRIO, KNAB, BUNQ, ASNB")]
    InvalidBankCode(String),

    /// Every drawn prefix produced an unrepresentable check digit.
    #[error("no representable check digit after {attempts} draws")]
    UnreachableCheckDigit {
        /// Number of prefixes drawn before giving up.
        attempts: usize,
    },
}

impl NummerError {
    /// Create a [`NummerError::Malformed`] error.
    pub fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a [`NummerError::ChecksumMismatch`] error.
    pub fn checksum(value: impl Into<String>) -> Self {
        Self::ChecksumMismatch {
            value: value.into(),
        }
    }
}
