//! Validate sources line by line

use crate::cli::common::{read_source, source_name};
use crate::project::{OutputFormat, Project};
use crate::syntax::{check_line, SyntaxError};
use clap::ArgMatches;
use rayon::prelude::*;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// One invalid line.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    file: String,

    /// One-based line number.
    line: usize,

    message: String,
    error: SyntaxError,
}

/// Check every line of `text`, returning `(line number, error)` for each
/// line that fails, in line order.
///
/// Lines are independent of each other, so they're checked in parallel.
pub fn check_source(text: &str) -> Vec<(usize, SyntaxError)> {
    let lines: Vec<&str> = text.lines().collect();

    lines
        .par_iter()
        .enumerate()
        .filter_map(|(i, line)| check_line(line).into_result().err().map(|e| (i + 1, e)))
        .collect()
}

/// Check one source, naming it in each diagnostic.
pub fn diagnose(path: &Path) -> io::Result<Vec<Diagnostic>> {
    let text = read_source(path)?;
    let file = source_name(path);

    if text.trim().is_empty() {
        eprintln!("WARN: {} has no source lines", file);
    }

    Ok(check_source(&text)
        .into_iter()
        .map(|(line, error)| Diagnostic {
            file: file.clone(),
            line,
            message: error.to_string(),
            error,
        })
        .collect())
}

pub fn check(project: &Project, format: OutputFormat, args: &ArgMatches) -> io::Result<()> {
    let paths: Vec<PathBuf> = match args.values_of("files") {
        Some(files) => files.map(PathBuf::from).collect(),
        None => project.iter_source_paths().collect(),
    };

    if paths.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "No sources given on the command line or in the project file.",
        ));
    }

    let mut diagnostics = Vec::new();
    for path in paths.iter() {
        diagnostics.extend(diagnose(path)?);
    }

    match format {
        OutputFormat::Text => {
            for d in diagnostics.iter() {
                println!("{}:{}: {}", d.file, d.line, d.message);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diagnostics)?),
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} invalid line(s) across {} source(s)",
                diagnostics.len(),
                paths.len()
            ),
        ))
    }
}
