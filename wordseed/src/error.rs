//! Error types for mnemonic generation.

use alloc::string::String;
use core::fmt;

/// Errors that can occur while generating or mapping mnemonic indices.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Requested entropy length (in bits) is not 128, 160, 192, 224, or 256.
    InvalidLength(usize),
    /// Requested word count is not 12, 15, 18, 21, or 24.
    InvalidWordCount(usize),
    /// The secure random source could not supply the requested bytes.
    RandomSource(rand_core::Error),
    /// An index falls outside the bounds of the word list.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the word list it was checked against.
        len: usize,
    },
    /// No registered word list matches the requested language name.
    NotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(bits) => {
                write!(f, "invalid entropy length {bits} bits, must be 128, 160, 192, 224, or 256")
            }
            Self::InvalidWordCount(n) => {
                write!(f, "invalid word count {n}, must be 12, 15, 18, 21, or 24")
            }
            Self::RandomSource(e) => write!(f, "random source error: {e}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} exceeds bounds of word list (length {len})")
            }
            Self::NotFound(name) => {
                write!(f, "no matching word list for language '{name}' was found")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RandomSource(e) => Some(e),
            Self::InvalidLength(_)
            | Self::InvalidWordCount(_)
            | Self::IndexOutOfRange { .. }
            | Self::NotFound(_) => None,
        }
    }
}

impl From<rand_core::Error> for Error {
    fn from(err: rand_core::Error) -> Self {
        Self::RandomSource(err)
    }
}

/// A convenient Result type alias for wordseed operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_invalid_length() {
        assert_eq!(
            Error::InvalidLength(100).to_string(),
            "invalid entropy length 100 bits, must be 128, 160, 192, 224, or 256"
        );
    }

    #[test]
    fn test_display_index_out_of_range() {
        let err = Error::IndexOutOfRange {
            index: 2048,
            len: 2048,
        };
        assert_eq!(
            err.to_string(),
            "index 2048 exceeds bounds of word list (length 2048)"
        );
    }

    #[test]
    fn test_display_not_found() {
        assert_eq!(
            Error::NotFound("Klingon".into()).to_string(),
            "no matching word list for language 'Klingon' was found"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_random_source_has_source() {
        use std::error::Error as _;

        let err = Error::from(rand_core::Error::new("device unavailable"));
        assert!(matches!(err, Error::RandomSource(_)));
        assert!(err.source().is_some());
        assert!(Error::InvalidWordCount(13).source().is_none());
    }
}
