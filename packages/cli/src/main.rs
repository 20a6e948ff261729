mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, convert, init, parse, BuildArgs, ConvertArgs, InitArgs, ParseArgs};
use tracing_subscriber::EnvFilter;

/// tsconvert - generate TypeScript interfaces from C# data classes
#[derive(Parser, Debug)]
#[command(name = "tsconvert")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log parser and compiler decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a tsconvert.config.json and an example class
    Init(InitArgs),

    /// Convert a single C# file (or stdin) to TypeScript
    Convert(ConvertArgs),

    /// Convert every .cs file under a directory
    Build(BuildArgs),

    /// Print the parsed declarations as JSON
    Parse(ParseArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Convert(args) => convert(args, &cwd),
        Command::Build(args) => build(args, &cwd),
        Command::Parse(args) => parse(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
