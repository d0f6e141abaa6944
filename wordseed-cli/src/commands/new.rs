//! Mnemonic generation command.

use clap::Args;
use colored::Colorize;
use tracing::{debug, info};
use wordseed::{entropy, mnemonic, BitLength, IndexSequence, Language, Phrase, WordList};

use super::index_bounds;

/// Generate a new mnemonic phrase.
#[derive(Args)]
pub struct NewCommand {
    /// Number of mnemonic words (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12", conflicts_with = "bits")]
    words: usize,

    /// Entropy strength in bits (128, 160, 192, 224, or 256).
    #[arg(short, long)]
    bits: Option<usize>,

    /// Word list language (see `wordseed languages`).
    #[arg(short, long, default_value = "english")]
    language: String,

    /// Reject index 0, matching generators that never emit the first word.
    #[arg(long)]
    legacy_bounds: bool,

    /// Also print the raw word indices.
    #[arg(short, long)]
    indices: bool,

    /// Display the phrase as a terminal QR code.
    #[arg(long)]
    qr: bool,
}

impl NewCommand {
    /// Execute the new command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let bits = match self.bits {
            Some(bits) => BitLength::from_bits(bits)?,
            None => BitLength::from_word_count(self.words)?,
        };
        let language: Language = self.language.parse()?;
        let bounds = index_bounds(self.legacy_bounds);
        debug!(%bits, %language, ?bounds, "generating mnemonic");

        let indices = entropy::generate(bits)?;
        let phrase = mnemonic::map_to_words_with(&indices, &language, bounds)?;
        info!(words = phrase.len(), "mnemonic generated");

        print_phrase(&language, bits, &phrase, self.indices.then_some(&indices));
        if self.qr {
            crate::qr::render_to_terminal(&phrase.to_zeroizing_string());
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_phrase(
    language: &Language,
    bits: BitLength,
    phrase: &Phrase<'_>,
    indices: Option<&IndexSequence>,
) {
    let rendered = phrase.to_zeroizing_string();

    println!();
    println!("      {}     {}", "Language".cyan().bold(), language.name());
    println!("      {}     {}", "Strength".cyan().bold(), bits);
    println!("      {}        {} words", "Words".cyan().bold(), phrase.len());
    println!("      {}     {}", "Mnemonic".cyan().bold(), rendered.as_str().green());
    if let Some(indices) = indices {
        let joined = indices.iter().map(u16::to_string).collect::<Vec<_>>().join(" ");
        println!("      {}      {}", "Indices".cyan().bold(), joined.dimmed());
    }
    println!();
}
