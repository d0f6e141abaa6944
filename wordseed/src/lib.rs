//! # Wordseed - BIP-39 Mnemonic Generation Core
//!
//! Turns cryptographically random entropy into BIP-39 word indices and maps
//! those indices onto a language word list.
//!
//! ## Pipeline
//!
//! 1. Draw `bits / 8` random bytes for a [`BitLength`] class.
//! 2. Append the leading `bits / 32` bits of SHA-256 over those bytes.
//! 3. Split the combined bitstream into 11-bit groups ([`IndexSequence`]).
//! 4. Map every index through a [`WordList`] to obtain a [`Phrase`].
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` implementations
//! - `rand` (default): operating system entropy via `OsRng`
//!
//! # Example
//!
//! ```
//! use wordseed::{entropy, mnemonic, BitLength, Language};
//!
//! let indices = entropy::indices_from_entropy(&[0u8; 16])?;
//! assert_eq!(indices.len(), BitLength::Bits128.word_count());
//!
//! let phrase = mnemonic::map_to_words(&indices, &Language::English)?;
//! assert_eq!(
//!     phrase.to_string(),
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//! # Ok::<(), wordseed::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::cast_possible_truncation,
    clippy::unreadable_literal
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod entropy;
pub mod error;
pub mod hash;
pub mod mnemonic;
pub mod traits;
pub mod types;
pub mod wordlist;

pub use error::{Error, Result};
pub use mnemonic::Phrase;
pub use traits::WordList;
pub use types::{BitLength, IndexBounds, IndexSequence};
pub use wordlist::Language;

// Re-export rand_core so callers can supply their own entropy sources
pub use rand_core;
