//! Wordseed - generate BIP-39 mnemonic phrases from the command line.
//!
//! Prints fresh phrases in any of the official word list languages.

mod commands;
pub mod qr;

use clap::Parser;
use commands::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::New(cmd) => cmd.execute()?,
        Commands::Languages(cmd) => cmd.execute(),
        Commands::Words(cmd) => cmd.execute()?,
    }
    Ok(())
}

/// Log to stderr so phrases on stdout stay pipeable.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "wordseed_cli=warn",
        1 => "wordseed_cli=info",
        _ => "wordseed_cli=debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
