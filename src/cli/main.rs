//! CLI support for non-command bits

use crate::cli::common::resolve_format;
use crate::cli::Command;
use crate::{cli, project};
use clap::{AppSettings, Arg, ArgSettings};
use std::io;
use std::str::FromStr;

pub fn main() -> io::Result<()> {
    let mut app = app_from_crate!().setting(AppSettings::SubcommandRequiredElseHelp);
    app = app.arg(
        Arg::with_name("project")
            .long("project")
            .value_name("rvsyntax.json")
            .takes_value(true)
            .help("The project file to load")
            .set(ArgSettings::Global),
    );
    app = app.arg(
        Arg::with_name("format")
            .long("format")
            .value_name("text|json")
            .takes_value(true)
            .help("How to print results")
            .set(ArgSettings::Global),
    );

    for cmd in Command::enumerate().iter() {
        app = app.subcommand(cmd.into_clap_subcommand());
    }

    let matches = app.get_matches();

    let project_filename = matches.value_of("project").unwrap_or("rvsyntax.json");
    let project = project::Project::read_or_default(project_filename)?;

    let (command, submatches) = matches.subcommand();
    let command = Command::from_str(command)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Please enter a command"))?;
    let format = resolve_format(&matches, submatches, &project)?;
    let submatches = submatches
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Please enter a command"))?;

    match command {
        Command::Check => cli::check(&project, format, submatches)?,
        Command::Highlight => cli::highlight(format, submatches)?,
        Command::Rules => cli::rules(format)?,
    };

    Ok(())
}
