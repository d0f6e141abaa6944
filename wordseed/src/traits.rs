//! Traits at the boundary between the index pipeline and word data.

use alloc::string::String;
use core::fmt::Debug;

/// A word list that indices can be mapped through.
///
/// Conformant BIP-39 lists hold exactly 2048 words. The mapper checks every
/// index against `words().len()`, so a short list yields
/// [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) rather than a panic.
///
/// # Thread Safety
/// This trait requires `Send + Sync` so a single list can serve concurrent
/// mapping calls.
pub trait WordList: Debug + Send + Sync {
    /// Human readable name of the list (usually the language).
    fn name(&self) -> &str;

    /// All words in index order.
    fn words(&self) -> &[&str];

    /// Integrity identifier of the list.
    ///
    /// Defaults to the lower-case hex SHA-256 of the list's text form, one
    /// word per line. Lists with a published reference digest should return
    /// that instead, so comparing it with
    /// [`checksum_of`](crate::wordlist::checksum_of) detects altered data.
    fn checksum(&self) -> String {
        crate::wordlist::checksum_of(self.words())
    }

    /// Separator placed between words when a phrase is rendered.
    fn separator(&self) -> &str {
        " "
    }

    /// Get the word at the given index.
    fn get_word(&self, index: usize) -> Option<&str> {
        self.words().get(index).copied()
    }

    /// Get the index of the given word.
    fn get_index(&self, word: &str) -> Option<usize> {
        self.words().iter().position(|w| *w == word)
    }
}
