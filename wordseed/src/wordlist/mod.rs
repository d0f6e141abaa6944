//! Word lists for mnemonic phrase generation.
//!
//! The registry is the fixed, ordered set of official BIP-39 languages. The
//! word data itself is bundled by the `bip39` crate; this module only adds
//! names, lookup by name, and list checksums.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::hash::sha256_lines;
use crate::traits::WordList;
use crate::{Error, Result};

/// Ideographic space (U+3000), the word separator for Japanese phrases.
const IDEOGRAPHIC_SPACE: &str = "\u{3000}";

/// Registered languages, in listing order.
const ALL: [Language; 8] = [
    Language::ChineseSimplified,
    Language::ChineseTraditional,
    Language::English,
    Language::French,
    Language::Italian,
    Language::Japanese,
    Language::Korean,
    Language::Spanish,
];

/// Official BIP-39 word list languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Simplified Chinese.
    ChineseSimplified,
    /// Traditional Chinese.
    ChineseTraditional,
    /// English.
    #[default]
    English,
    /// French.
    French,
    /// Italian.
    Italian,
    /// Japanese.
    Japanese,
    /// Korean.
    Korean,
    /// Spanish.
    Spanish,
}

impl Language {
    /// All registered languages in listing order.
    #[inline]
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &ALL
    }

    /// Get the registered language name.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChineseSimplified => "Chinese-Simplified",
            Self::ChineseTraditional => "Chinese-Traditional",
            Self::English => "English",
            Self::French => "French",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Spanish => "Spanish",
        }
    }

    /// Convert to the `bip39` crate's language type.
    #[inline]
    #[must_use]
    pub const fn to_bip39_language(self) -> bip39::Language {
        match self {
            Self::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Self::ChineseTraditional => bip39::Language::TraditionalChinese,
            Self::English => bip39::Language::English,
            Self::French => bip39::Language::French,
            Self::Italian => bip39::Language::Italian,
            Self::Japanese => bip39::Language::Japanese,
            Self::Korean => bip39::Language::Korean,
            Self::Spanish => bip39::Language::Spanish,
        }
    }

    /// The 2048 words of this language, in index order.
    #[inline]
    #[must_use]
    pub fn word_list(self) -> &'static [&'static str; 2048] {
        self.to_bip39_language().word_list()
    }

    /// SHA-256 of the published BIP-39 word list file for this language.
    ///
    /// The bundled word data must hash to this value; see [`Language::verify`].
    #[must_use]
    pub const fn reference_checksum(self) -> &'static str {
        match self {
            Self::ChineseSimplified => {
                "5c5942792bd8340cb8b27cd592f1015edf56a8c5b26276ee18a482428e7c5726"
            }
            Self::ChineseTraditional => {
                "417b26b3d8500a4ae3d59717d7011952db6fc2fb84b807f3f94ac734e89c1b5f"
            }
            Self::English => "2f5eed53a4727b4bf8880d8f3f199efc90e58503646d9ff8eff3a2ed3b24dbda",
            Self::French => "ebc3959ab7801a1df6bac4fa7d970652f1df76b683cd2f4003c941c63d517e59",
            Self::Italian => "d392c49fdb700a24cd1fceb237c1f65dcc128f6b34a8aacb58b59384b5c648c2",
            Self::Japanese => "2eed0aef492291e061633d7ad8117f1a2b03eb80a29d0e4e3117ac2528d05ffd",
            Self::Korean => "9e95f86c167de88f450f0aaf89e87f6624a57f973c67b516e338e8e8b8897f60",
            Self::Spanish => "46846a5a0139d1e3cb77293e521c2865f7bcdb82c44e8d0a06a2cd0ecba48c0b",
        }
    }

    /// Check the bundled words against the published checksum.
    pub fn verify(self) -> bool {
        checksum_of(self.words()) == self.reference_checksum()
    }
}

impl WordList for Language {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn words(&self) -> &[&str] {
        self.word_list()
    }

    fn checksum(&self) -> String {
        self.reference_checksum().to_string()
    }

    fn separator(&self) -> &str {
        match self {
            Self::Japanese => IDEOGRAPHIC_SPACE,
            _ => " ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        by_language_name(s)
    }
}

/// Names of all registered languages, in listing order.
pub fn language_names() -> Vec<&'static str> {
    Language::all().iter().map(|l| l.as_str()).collect()
}

/// Find a registered language by name.
///
/// Comparison is ASCII case-insensitive, so `"english"`, `"English"` and
/// `"ENGLISH"` all match.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no language has that name.
pub fn by_language_name(name: &str) -> Result<Language> {
    Language::all()
        .iter()
        .copied()
        .find(|l| l.as_str().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::NotFound(name.to_string()))
}

/// Compute the checksum of a word list: hex SHA-256 over one word per line.
pub fn checksum_of(words: &[&str]) -> String {
    hex::encode(sha256_lines(words.iter().copied()))
}
