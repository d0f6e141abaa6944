//! CLI command definitions and handlers.

mod languages;
mod new;
mod words;

use clap::{Parser, Subcommand};
pub use languages::LanguagesCommand;
pub use new::NewCommand;
pub use words::WordsCommand;
use wordseed::IndexBounds;

/// Wordseed - generate BIP-39 mnemonic phrases.
#[derive(Parser)]
#[command(name = "wordseed")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new mnemonic phrase.
    #[command(alias = "generate")]
    New(NewCommand),

    /// List available word list languages.
    #[command(alias = "langs")]
    Languages(LanguagesCommand),

    /// Look up the words at the given indices.
    Words(WordsCommand),
}

/// Bounds policy selected by the `--legacy-bounds` flag.
fn index_bounds(legacy: bool) -> IndexBounds {
    if legacy {
        IndexBounds::Legacy
    } else {
        IndexBounds::Bip39
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_new_defaults() {
        let cli = Cli::try_parse_from(["wordseed", "new"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn test_parse_verbosity() {
        let cli = Cli::try_parse_from(["wordseed", "-vv", "languages"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_words_and_bits_conflict() {
        assert!(Cli::try_parse_from(["wordseed", "new", "-w", "24", "-b", "256"]).is_err());
    }

    #[test]
    fn test_index_bounds_flag() {
        assert_eq!(index_bounds(false), IndexBounds::Bip39);
        assert_eq!(index_bounds(true), IndexBounds::Legacy);
    }
}
