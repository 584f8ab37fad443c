use std::{io, process};

use clap::Parser;
use interpreter::repl::{self, Mode, ReplConfig, PROMPT};

/// Tokenize or parse source code, one line at a time.
#[derive(Parser, Debug)]
#[command(name = "interpreter", version, about)]
struct Args {
    /// Parse each line and print the program instead of its tokens
    #[arg(long)]
    parse: bool,

    /// Prompt printed before each line
    #[arg(long, default_value = PROMPT)]
    prompt: String,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = Args::parse();
    let config = ReplConfig {
        prompt: args.prompt,
        mode: if args.parse { Mode::Parse } else { Mode::Tokens },
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(error) = repl::start(stdin.lock(), stdout.lock(), &config) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
