use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tsconvert_compiler::Converter;
use tsconvert_parser::Document;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// C# source file (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Write TypeScript to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read the declaration model as JSON instead of C# source
    #[arg(long)]
    pub from_json: bool,

    /// Fail on types that are neither scalars nor declared classes
    #[arg(long)]
    pub strict: bool,
}

pub fn convert(args: ConvertArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut options = config.compile_options();
    options.strict |= args.strict;
    let converter = Converter::new(options);

    let input = read_input(args.input.as_deref())?;

    let output = if args.from_json {
        let document: Document =
            serde_json::from_str(&input).context("Input is not a valid declaration model")?;
        converter.compile(&document)?
    } else {
        converter.convert(&input)?
    };

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, format!("{}\n", output))?;
            eprintln!("  {} {}", "✓".green(), path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Read a file, or stdin for `None` and `-`
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Cannot read stdin")?;
            Ok(buffer)
        }
    }
}
