//! Error types for the Bootstring codec.

/// Errors produced while building a codec or transforming a string.
///
/// Every error is terminal: the transform is pure, so retrying with the same
/// input reproduces the same error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction parameters are invalid or mutually inconsistent.
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    /// Encoder input holds an extended index below the initial code point.
    #[error("invalid character: index {index} at position {position} is below the initial code point")]
    InvalidCharacter { position: usize, index: u32 },

    /// Decoder input is not a well-formed Bootstring string.
    #[error("invalid format: {0}")]
    InvalidFormat(#[from] FormatError),

    /// An intermediate value left the `u32` range.
    #[error("arithmetic overflow")]
    Overflow,

    /// A character is not a member of the queried alphabet.
    #[error("unknown character {0:?}")]
    UnknownCharacter(char),

    /// An index lies outside `[0, len)` of the queried alphabet.
    #[error("index {index} is out of range for an alphabet of length {len}")]
    IndexOutOfRange { index: u32, len: u32 },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}

/// Ways a decoder input can be malformed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A non-basic character appears before the last delimiter.
    #[error("non-basic character at position {position} before the delimiter")]
    ExtendedBeforeDelimiter { position: usize },

    /// A character after the delimiter is not a digit.
    #[error("character at position {position} is not a digit")]
    InvalidDigit { position: usize },

    /// The input ended inside a variable-length integer.
    #[error("input ended in the middle of a variable-length integer")]
    UnexpectedEnd,

    /// A decoded code point points back into the basic alphabet.
    #[error("decoded code point {0} lies in the basic range")]
    BasicCodePoint(u32),

    /// A decoded code point has no character in the extended alphabet.
    #[error("decoded code point {0} lies outside the extended alphabet")]
    OutsideAlphabet(u32),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
