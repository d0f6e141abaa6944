//! Word list listing command.

use clap::Args;
use colored::Colorize;
use wordseed::{Language, WordList};

/// List available word list languages.
#[derive(Args)]
pub struct LanguagesCommand {
    /// Also print each word list's SHA-256 checksum.
    #[arg(short, long)]
    checksums: bool,
}

impl LanguagesCommand {
    /// Execute the languages command.
    pub fn execute(self) {
        println!();
        for language in Language::all() {
            if self.checksums {
                println!(
                    "      {:<20} {}",
                    language.name().cyan().bold(),
                    language.checksum().dimmed()
                );
            } else {
                println!("      {}", language.name().cyan().bold());
            }
        }
        println!();
    }
}
