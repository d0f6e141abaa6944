//! Core types used throughout the library.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, Result};

/// Number of bits encoded by a single word (2^11 = 2048 words).
pub const BITS_PER_WORD: usize = 11;

/// Number of words in a conformant BIP-39 word list.
pub const WORD_LIST_LEN: usize = 1 << BITS_PER_WORD;

/// Supported entropy strengths.
///
/// Each class fixes the entropy byte count, the checksum width and the
/// resulting number of words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitLength {
    /// 128 bits of entropy, 12 words.
    #[default]
    Bits128,
    /// 160 bits of entropy, 15 words.
    Bits160,
    /// 192 bits of entropy, 18 words.
    Bits192,
    /// 224 bits of entropy, 21 words.
    Bits224,
    /// 256 bits of entropy, 24 words.
    Bits256,
}

impl BitLength {
    /// All classes in ascending order of strength.
    pub const ALL: [Self; 5] = [
        Self::Bits128,
        Self::Bits160,
        Self::Bits192,
        Self::Bits224,
        Self::Bits256,
    ];

    /// Look up the class for a raw bit count.
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(Self::Bits128),
            160 => Ok(Self::Bits160),
            192 => Ok(Self::Bits192),
            224 => Ok(Self::Bits224),
            256 => Ok(Self::Bits256),
            _ => Err(Error::InvalidLength(bits)),
        }
    }

    /// Look up the class producing the given number of words.
    pub fn from_word_count(words: usize) -> Result<Self> {
        match words {
            12 => Ok(Self::Bits128),
            15 => Ok(Self::Bits160),
            18 => Ok(Self::Bits192),
            21 => Ok(Self::Bits224),
            24 => Ok(Self::Bits256),
            _ => Err(Error::InvalidWordCount(words)),
        }
    }

    /// Look up the class for an entropy buffer of `len` bytes.
    pub fn from_entropy_len(len: usize) -> Result<Self> {
        Self::from_bits(len.saturating_mul(8))
    }

    /// Entropy size in bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits192 => 192,
            Self::Bits224 => 224,
            Self::Bits256 => 256,
        }
    }

    /// Entropy size in bytes (`bits / 8`).
    #[inline]
    #[must_use]
    pub const fn entropy_bytes(self) -> usize {
        self.bits() / 8
    }

    /// Number of checksum bits appended to the entropy (`bits / 32`).
    #[inline]
    #[must_use]
    pub const fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    /// Length of entropy plus checksum, always a multiple of 11.
    #[inline]
    #[must_use]
    pub const fn total_bits(self) -> usize {
        self.bits() + self.checksum_bits()
    }

    /// Number of words in a phrase of this strength.
    #[inline]
    #[must_use]
    pub const fn word_count(self) -> usize {
        self.total_bits() / BITS_PER_WORD
    }
}

impl fmt::Display for BitLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

impl TryFrom<usize> for BitLength {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        Self::from_bits(bits)
    }
}

/// Policy used when checking indices against a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexBounds {
    /// Accept `0 <= index < len`, as BIP-39 requires.
    #[default]
    Bip39,
    /// Accept `0 < index < len`.
    ///
    /// Never selects the first word of a list. Only useful to reproduce
    /// phrases produced by older generators that applied this check.
    Legacy,
}

impl IndexBounds {
    /// Whether `index` is acceptable for a list of `len` words.
    #[inline]
    #[must_use]
    pub const fn admits(self, index: usize, len: usize) -> bool {
        match self {
            Self::Bip39 => index < len,
            Self::Legacy => index > 0 && index < len,
        }
    }
}

/// Ordered word indices, one per 11-bit group.
///
/// The indices fully determine the entropy they were derived from, so the
/// backing storage is zeroized on drop and `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct IndexSequence(Vec<u16>);

impl IndexSequence {
    /// Wrap caller-supplied indices.
    ///
    /// No range check is performed here; the mapper validates indices
    /// against the word list it is given.
    pub fn new(indices: Vec<u16>) -> Self {
        Self(indices)
    }

    /// Get the indices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.0
    }

    /// Get the number of indices (the phrase word count).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for IndexSequence {
    type Target = [u16];

    fn deref(&self) -> &[u16] {
        &self.0
    }
}

impl AsRef<[u16]> for IndexSequence {
    fn as_ref(&self) -> &[u16] {
        &self.0
    }
}

impl From<Vec<u16>> for IndexSequence {
    fn from(indices: Vec<u16>) -> Self {
        Self(indices)
    }
}

impl fmt::Debug for IndexSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexSequence({} indices)[REDACTED]", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn test_bit_length_from_bits() {
        assert_eq!(BitLength::from_bits(128).unwrap(), BitLength::Bits128);
        assert_eq!(BitLength::from_bits(160).unwrap(), BitLength::Bits160);
        assert_eq!(BitLength::from_bits(192).unwrap(), BitLength::Bits192);
        assert_eq!(BitLength::from_bits(224).unwrap(), BitLength::Bits224);
        assert_eq!(BitLength::from_bits(256).unwrap(), BitLength::Bits256);
    }

    #[test]
    fn test_bit_length_rejects_other_values() {
        for bits in [0, 100, 127, 129, 300, 512] {
            assert!(
                matches!(BitLength::from_bits(bits), Err(Error::InvalidLength(b)) if b == bits),
                "{bits} should be rejected"
            );
        }
        assert!(BitLength::try_from(300usize).is_err());
    }

    #[test]
    fn test_bit_length_from_word_count() {
        assert_eq!(BitLength::from_word_count(12).unwrap(), BitLength::Bits128);
        assert_eq!(BitLength::from_word_count(24).unwrap(), BitLength::Bits256);
        assert!(matches!(
            BitLength::from_word_count(13),
            Err(Error::InvalidWordCount(13))
        ));
    }

    #[test]
    fn test_bit_length_from_entropy_len() {
        assert_eq!(BitLength::from_entropy_len(16).unwrap(), BitLength::Bits128);
        assert_eq!(BitLength::from_entropy_len(32).unwrap(), BitLength::Bits256);
        assert!(matches!(
            BitLength::from_entropy_len(15),
            Err(Error::InvalidLength(120))
        ));
    }

    #[test]
    fn test_bit_accounting() {
        let expected = [(132, 12), (165, 15), (198, 18), (231, 21), (264, 24)];
        for (class, (total, words)) in BitLength::ALL.iter().zip(expected) {
            assert_eq!(class.total_bits(), total);
            assert_eq!(class.total_bits() % BITS_PER_WORD, 0);
            assert_eq!(class.word_count(), words);
            assert_eq!(class.entropy_bytes() * 8, class.bits());
        }
    }

    #[test]
    fn test_bit_length_display() {
        assert_eq!(format!("{}", BitLength::Bits192), "192 bits");
    }

    #[test]
    fn test_index_bounds_bip39() {
        let bounds = IndexBounds::Bip39;
        assert!(bounds.admits(0, WORD_LIST_LEN));
        assert!(bounds.admits(2047, WORD_LIST_LEN));
        assert!(!bounds.admits(2048, WORD_LIST_LEN));
    }

    #[test]
    fn test_index_bounds_legacy() {
        let bounds = IndexBounds::Legacy;
        assert!(!bounds.admits(0, WORD_LIST_LEN));
        assert!(bounds.admits(1, WORD_LIST_LEN));
        assert!(bounds.admits(2047, WORD_LIST_LEN));
        assert!(!bounds.admits(2048, WORD_LIST_LEN));
    }

    #[test]
    fn test_index_bounds_default() {
        assert_eq!(IndexBounds::default(), IndexBounds::Bip39);
    }

    #[test]
    fn test_index_sequence_debug_redacted() {
        let seq = IndexSequence::new(vec![1, 2, 3]);
        assert_eq!(format!("{seq:?}"), "IndexSequence(3 indices)[REDACTED]");
    }

    #[test]
    fn test_index_sequence_deref() {
        let seq = IndexSequence::from(vec![7, 2047]);
        assert_eq!(seq.len(), 2);
        assert_eq!(&seq[..], &[7u16, 2047][..]);
        assert_eq!(seq.as_slice().first(), Some(&7));
    }
}
