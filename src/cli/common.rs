//! Common utilities for command implementations

use crate::project::{OutputFormat, Project};
use clap::{App, Arg, ArgMatches, SubCommand};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::{fs, io};

/// Enumeration of all CLI commands
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Check,
    Highlight,
    Rules,
}

impl Command {
    /// Enumerate all commands that rvsyntax recognizes.
    pub fn enumerate() -> Vec<Self> {
        use Command::*;

        vec![Check, Highlight, Rules]
    }

    /// Construct the subcommand object for this particular `Command`.
    pub fn into_clap_subcommand<'a, 'b>(self) -> App<'a, 'b> {
        match self {
            Command::Check => SubCommand::with_name("check")
                .alias("lint")
                .about("Validate every line of one or more assembly sources")
                .arg(
                    Arg::with_name("files")
                        .value_name("main.s")
                        .index(1)
                        .multiple(true)
                        .help("Sources to check, or - for stdin. Defaults to the project's sources"),
                ),
            Command::Highlight => SubCommand::with_name("highlight")
                .about("Print the highlighting annotations for an assembly source")
                .arg(
                    Arg::with_name("file")
                        .value_name("main.s")
                        .index(1)
                        .required(true)
                        .help("Source to annotate, or - for stdin"),
                ),
            Command::Rules => {
                SubCommand::with_name("rules").about("List every instruction the checker knows")
            }
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "check" => Ok(Command::Check),
            "highlight" => Ok(Command::Highlight),
            "rules" => Ok(Command::Rules),
            _ => Err(()),
        }
    }
}

/// Determine the output format, preferring the command line over the
/// project file.
pub fn resolve_format(
    matches: &ArgMatches,
    submatches: Option<&ArgMatches>,
    project: &Project,
) -> io::Result<OutputFormat> {
    let requested = submatches
        .and_then(|m| m.value_of("format"))
        .or_else(|| matches.value_of("format"));

    match requested {
        Some(requested) => OutputFormat::from_str(requested).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown output format {}, expected text or json", requested),
            )
        }),
        None => Ok(project.format()),
    }
}

/// Name of a source for use in diagnostics.
pub fn source_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read an entire source file, with `-` meaning standard input.
pub fn read_source(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;

        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}
