use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use javalex::{display_error, errors::errors::Error, tokenize, tokenize_all};
use log::{info, LevelFilter};

/// Tokenizes a Java-like source file and prints one token per line.
#[derive(Parser, Debug)]
#[command(name = "javalex", version, about)]
struct Args {
    /// Source file to tokenize
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Also print comments, whitespace, tabs and newlines
    #[arg(long)]
    all: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    let file_contents = read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let start = Instant::now();
    let result = if args.all {
        tokenize_all(&file_contents, file_name)
    } else {
        tokenize(&file_contents, file_name)
    };

    match result {
        Ok(tokens) => {
            info!("Tokenized in {:?}", start.elapsed());
            for token in tokens {
                println!("{}", token);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            println!("{}", error);
            display_error(&Error::from(error), &file_contents);
            Ok(ExitCode::FAILURE)
        }
    }
}
