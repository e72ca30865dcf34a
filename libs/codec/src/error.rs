//! Error types for codec configuration.

use thiserror::Error;

/// Errors that can occur when constructing a codec.
///
/// Construction is the only fallible codec operation; decoding malformed
/// input is a normal outcome (`None`), not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The alphabet has too few characters to encode with.
    #[error("alphabet must contain at least {min} characters, got {actual}")]
    AlphabetTooShort { min: usize, actual: usize },

    /// The alphabet contains a non-ASCII character.
    #[error("alphabet must contain only ASCII characters")]
    AlphabetNotAscii,

    /// The alphabet contains the same character more than once.
    #[error("alphabet contains duplicate character '{0}'")]
    AlphabetDuplicateChar(char),

    /// The requested minimum length exceeds the supported maximum.
    #[error("minimum length must be at most {max}, got {actual}")]
    MinLengthTooLarge { max: usize, actual: usize },
}
