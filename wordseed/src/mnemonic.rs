//! Mapping word indices onto a word list.
//!
//! Every index is checked against the list before any word is returned, so
//! a call either yields the complete phrase or an error, never a prefix.
//!
//! # Example
//!
//! ```
//! use wordseed::{mnemonic, IndexBounds, Language};
//!
//! let phrase = mnemonic::map_to_words(&[0, 1, 2047], &Language::English)?;
//! assert_eq!(phrase.words(), ["abandon", "ability", "zoo"]);
//!
//! // Index 0 is refused under the legacy bounds.
//! let legacy = mnemonic::map_to_words_with(&[0, 1], &Language::English, IndexBounds::Legacy);
//! assert!(legacy.is_err());
//! # Ok::<(), wordseed::Error>(())
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::entropy::generate_indices;
use crate::traits::WordList;
use crate::types::{BitLength, IndexBounds};
use crate::{Error, Result};

/// An ordered mnemonic phrase borrowed from a word list.
#[derive(Clone, PartialEq, Eq)]
pub struct Phrase<'a> {
    words: Vec<&'a str>,
    separator: &'a str,
}

impl<'a> Phrase<'a> {
    /// Get the words in phrase order.
    #[inline]
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Get the word count.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the phrase has no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the separator used when rendering the phrase.
    #[inline]
    pub fn separator(&self) -> &'a str {
        self.separator
    }

    /// Render the phrase into a buffer that is wiped on drop.
    pub fn to_zeroizing_string(&self) -> Zeroizing<String> {
        Zeroizing::new(self.words.join(self.separator))
    }
}

impl fmt::Display for Phrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(self.separator)?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Phrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phrase({} words)", self.words.len())
    }
}

/// Map indices to words using BIP-39 bounds (`0 <= index < len`).
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] for the first index outside the list.
pub fn map_to_words<'a, L>(indices: &[u16], list: &'a L) -> Result<Phrase<'a>>
where
    L: WordList + ?Sized,
{
    map_to_words_with(indices, list, IndexBounds::default())
}

/// Map indices to words under an explicit bounds policy.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfRange`] for the first index the policy rejects.
pub fn map_to_words_with<'a, L>(
    indices: &[u16],
    list: &'a L,
    bounds: IndexBounds,
) -> Result<Phrase<'a>>
where
    L: WordList + ?Sized,
{
    let words = list.words();
    let len = words.len();

    let words = indices
        .iter()
        .map(|&index| {
            let index = usize::from(index);
            if bounds.admits(index, len) {
                Ok(words[index])
            } else {
                Err(Error::IndexOutOfRange { index, len })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Phrase {
        words,
        separator: list.separator(),
    })
}

/// Generate a fresh phrase: random indices mapped through `list`.
pub fn generate_phrase<'a, R, L>(rng: &mut R, bits: BitLength, list: &'a L) -> Result<Phrase<'a>>
where
    R: RngCore + CryptoRng,
    L: WordList + ?Sized,
{
    let indices = generate_indices(rng, bits)?;
    map_to_words(&indices, list)
}
