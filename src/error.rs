//! Error types
//!
//! Hashing itself never fails. Errors only arise when text input is not
//! well-formed UTF-8, when a hex string cannot be decoded, or when a
//! manifest is configured with an unusable fingerprint length.

use thiserror::Error;

/// Errors returned by the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input bytes are not well-formed UTF-8 text.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },

    /// A hex string could not be decoded.
    #[error("invalid hex: {reason}")]
    InvalidHex {
        /// What was wrong with the input.
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which value was rejected and why.
        reason: String,
    },
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
