use super::convert::read_input;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tsconvert_compiler::Converter;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// C# source file (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,
}

/// Print the parsed declaration model as JSON
pub fn parse(args: ParseArgs, _cwd: &str) -> Result<()> {
    let source = read_input(args.input.as_deref())?;
    let document = Converter::default().parse(&source)?;

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
