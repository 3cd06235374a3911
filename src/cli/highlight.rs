//! Print highlighting annotations

use crate::cli::common::{read_source, source_name};
use crate::highlight::{highlight_line, AnnotatedLine};
use crate::project::OutputFormat;
use clap::ArgMatches;
use std::io;
use std::path::PathBuf;

pub fn highlight(format: OutputFormat, args: &ArgMatches) -> io::Result<()> {
    let path = args
        .value_of("file")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Must specify a source to highlight"))?;
    let text = read_source(&path)?;
    let lines: Vec<AnnotatedLine> = text.lines().map(highlight_line).collect();

    match format {
        OutputFormat::Text => {
            for (i, line) in lines.iter().enumerate() {
                println!("{}: {}", i + 1, line);
            }
        }
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = lines.iter().map(|l| l.to_json()).collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    let invalid = lines.iter().filter(|l| !l.verdict().is_valid()).count();
    if invalid > 0 {
        eprintln!(
            "WARN: {} of {} line(s) in {} failed to validate",
            invalid,
            lines.len(),
            source_name(&path)
        );
    }

    Ok(())
}
