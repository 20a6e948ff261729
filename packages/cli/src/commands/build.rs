use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tsconvert_compiler::Converter;
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Directory to search for .cs files (defaults to the configured srcDir)
    pub path: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Fail on types that are neither scalars nor declared classes
    #[arg(long)]
    pub strict: bool,
}

pub fn build(args: BuildArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let src_dir = match &args.path {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_src_dir(cwd),
    };
    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let mut options = config.compile_options();
    options.strict |= args.strict;
    let converter = Converter::new(options);

    println!("{}", "🔨 Converting C# classes...".bright_blue().bold());

    let cs_files = find_cs_files(&src_dir);
    if cs_files.is_empty() {
        println!("{}", "⚠️  No .cs files found".yellow());
        return Ok(());
    }

    println!("Found {} files", cs_files.len());

    let mut success_count = 0;
    let mut skipped_count = 0;
    let mut error_count = 0;

    for cs_file in &cs_files {
        let relative_path = cs_file.strip_prefix(&src_dir).unwrap_or(cs_file);

        match convert_file(cs_file, relative_path, &out_dir, &converter) {
            Ok(Some(output_path)) => {
                success_count += 1;
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative_path.display(),
                    output_path.display()
                );
            }
            Ok(None) => {
                skipped_count += 1;
                println!(
                    "  {} {} - no classes",
                    "-".dimmed(),
                    relative_path.display()
                );
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Converted {} files successfully ({} without classes)",
            "✅".green(),
            success_count,
            skipped_count
        );
    } else {
        println!(
            "{} Converted {} files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
        return Err(anyhow!(
            "{} of {} files failed to convert",
            error_count,
            cs_files.len()
        ));
    }

    Ok(())
}

fn find_cs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("cs"))
        .collect();
    files.sort();
    files
}

/// Convert one file; `None` when it declares no classes
fn convert_file(
    file_path: &Path,
    relative_path: &Path,
    out_dir: &Path,
    converter: &Converter,
) -> Result<Option<PathBuf>> {
    let source = fs::read_to_string(file_path)?;
    if source.trim().is_empty() {
        return Ok(None);
    }

    let output = converter.convert(&source)?;
    if output.is_empty() {
        debug!(file = %file_path.display(), "No declarations found");
        return Ok(None);
    }

    let output_file = out_dir.join(relative_path).with_extension("ts");
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, format!("{}\n", output))?;

    Ok(Some(output_file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tsconvert-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_convert_file_writes_ts() {
        let dir = scratch_dir("convert-file");
        let src = dir.join("Models").join("Person.cs");
        fs::create_dir_all(src.parent().unwrap()).unwrap();
        fs::write(&src, "public class Person\n{\npublic string Name { get; set; }\n}\n").unwrap();

        let out_dir = dir.join("dist");
        let written = convert_file(&src, Path::new("Models/Person.cs"), &out_dir, &Converter::default())
            .unwrap()
            .expect("output file");

        assert_eq!(written, out_dir.join("Models").join("Person.ts"));
        assert_eq!(
            fs::read_to_string(&written).unwrap(),
            "export interface Person {\n    name: string;\n}\n"
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_convert_file_skips_files_without_classes() {
        let dir = scratch_dir("skip-file");
        let src = dir.join("Enums.cs");
        fs::write(&src, "public enum Color { Red, Green }\n").unwrap();

        let result = convert_file(&src, Path::new("Enums.cs"), &dir.join("dist"), &Converter::default()).unwrap();
        assert!(result.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    fn build_args(strict: bool) -> BuildArgs {
        BuildArgs {
            path: None,
            out_dir: None,
            strict,
        }
    }

    #[test]
    fn test_build_fails_when_a_file_fails() {
        let dir = scratch_dir("build-errors");
        let src_dir = dir.join("src");
        fs::create_dir_all(&src_dir).unwrap();
        fs::write(src_dir.join("Good.cs"), "public class Good\n{\npublic int Id { get; set; }\n}\n").unwrap();
        fs::write(src_dir.join("Bad.cs"), "public class Bad\n{\npublic Widget Part { get; set; }\n}\n").unwrap();

        let err = build(build_args(true), dir.to_str().unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 files failed to convert");
        assert!(dir.join("dist").join("Good.ts").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_build_succeeds_without_errors() {
        let dir = scratch_dir("build-ok");
        let src_dir = dir.join("src");
        fs::create_dir_all(&src_dir).unwrap();
        fs::write(src_dir.join("Bad.cs"), "public class Bad\n{\npublic Widget Part { get; set; }\n}\n").unwrap();

        build(build_args(false), dir.to_str().unwrap()).unwrap();
        assert!(dir.join("dist").join("Bad.ts").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_find_cs_files_is_sorted_and_filtered() {
        let dir = scratch_dir("find-files");
        fs::write(dir.join("b.cs"), "").unwrap();
        fs::write(dir.join("a.cs"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        let files = find_cs_files(&dir);
        assert_eq!(files, vec![dir.join("a.cs"), dir.join("b.cs")]);

        let _ = fs::remove_dir_all(&dir);
    }
}
