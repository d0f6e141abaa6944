//! Index lookup command.

use clap::Args;
use colored::Colorize;
use tracing::debug;
use wordseed::{mnemonic, Language, WordList};

use super::index_bounds;

/// Look up the words at the given indices.
#[derive(Args)]
pub struct WordsCommand {
    /// Word indices (0-2047), in phrase order.
    #[arg(required = true, num_args = 1..)]
    indices: Vec<u16>,

    /// Word list language (see `wordseed languages`).
    #[arg(short, long, default_value = "english")]
    language: String,

    /// Reject index 0, matching generators that never emit the first word.
    #[arg(long)]
    legacy_bounds: bool,
}

impl WordsCommand {
    /// Execute the words command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let language: Language = self.language.parse()?;
        let bounds = index_bounds(self.legacy_bounds);
        debug!(%language, ?bounds, count = self.indices.len(), "mapping indices");

        let phrase = mnemonic::map_to_words_with(&self.indices, &language, bounds)?;

        println!();
        println!("      {}     {}", "Language".cyan().bold(), language.name());
        let rendered = phrase.to_zeroizing_string();
        println!("      {}        {}", "Words".cyan().bold(), rendered.as_str().green());
        println!();
        Ok(())
    }
}
