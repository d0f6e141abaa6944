//! Entropy generation and conversion to BIP-39 word indices.
//!
//! Entropy bytes are hashed with SHA-256, the leading `bits / 32` bits of the
//! digest are appended as a checksum, and the combined bitstream is split
//! into 11-bit big-endian groups.
//!
//! # Example
//!
//! ```
//! use wordseed::entropy;
//!
//! let indices = entropy::indices_from_entropy(&[0u8; 16])?;
//! assert_eq!(indices.as_slice(), &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3]);
//! # Ok::<(), wordseed::Error>(())
//! ```

use alloc::vec;
use alloc::vec::Vec;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::hash::{leading_bits, sha256};
use crate::types::{BitLength, IndexSequence, BITS_PER_WORD};
use crate::Result;

/// Generate word indices from a caller-supplied random source.
///
/// Draws exactly `bits.entropy_bytes()` bytes. The source is asked once;
/// failure is returned as [`Error::RandomSource`](crate::Error::RandomSource)
/// without retrying.
pub fn generate_indices<R: RngCore + CryptoRng>(
    rng: &mut R,
    bits: BitLength,
) -> Result<IndexSequence> {
    let mut entropy = Zeroizing::new(vec![0u8; bits.entropy_bytes()]);
    rng.try_fill_bytes(&mut entropy)?;
    indices_from_entropy(&entropy)
}

/// Generate word indices for a raw bit count.
///
/// The bit count is validated before any randomness is drawn.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`](crate::Error::InvalidLength) unless
/// `bits` is 128, 160, 192, 224, or 256.
pub fn generate_indices_with_len<R: RngCore + CryptoRng>(
    rng: &mut R,
    bits: usize,
) -> Result<IndexSequence> {
    let bits = BitLength::from_bits(bits)?;
    generate_indices(rng, bits)
}

/// Convert entropy bytes into word indices.
///
/// Deterministic: the same entropy always yields the same indices.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`](crate::Error::InvalidLength) unless the
/// entropy is 16, 20, 24, 28, or 32 bytes long.
pub fn indices_from_entropy(entropy: &[u8]) -> Result<IndexSequence> {
    let bits = BitLength::from_entropy_len(entropy.len())?;
    let hash = Zeroizing::new(sha256(entropy));

    // Entropy bits followed by checksum bits, MSB first.
    let mut stream: Zeroizing<Vec<bool>> = Zeroizing::new(Vec::with_capacity(bits.total_bits()));
    for byte in entropy {
        for i in (0..8).rev() {
            stream.push((byte >> i) & 1 == 1);
        }
    }
    stream.extend(leading_bits(hash.as_slice(), bits.checksum_bits()));

    let indices = stream
        .chunks_exact(BITS_PER_WORD)
        .map(|group| {
            group
                .iter()
                .fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit))
        })
        .collect();

    Ok(IndexSequence::new(indices))
}

/// Generate word indices using the operating system's random source.
#[cfg(feature = "rand")]
pub fn generate(bits: BitLength) -> Result<IndexSequence> {
    generate_indices(&mut rand_core::OsRng, bits)
}

/// Generate indices for a 12-word phrase (128 bits of entropy).
#[cfg(feature = "rand")]
pub fn new_12_words() -> Result<IndexSequence> {
    generate(BitLength::Bits128)
}

/// Generate indices for a 15-word phrase (160 bits of entropy).
#[cfg(feature = "rand")]
pub fn new_15_words() -> Result<IndexSequence> {
    generate(BitLength::Bits160)
}

/// Generate indices for an 18-word phrase (192 bits of entropy).
#[cfg(feature = "rand")]
pub fn new_18_words() -> Result<IndexSequence> {
    generate(BitLength::Bits192)
}

/// Generate indices for a 21-word phrase (224 bits of entropy).
#[cfg(feature = "rand")]
pub fn new_21_words() -> Result<IndexSequence> {
    generate(BitLength::Bits224)
}

/// Generate indices for a 24-word phrase (256 bits of entropy).
#[cfg(feature = "rand")]
pub fn new_24_words() -> Result<IndexSequence> {
    generate(BitLength::Bits256)
}
