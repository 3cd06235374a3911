//! CLI test suite

use crate::cli::check::{check_source, diagnose};
use crate::cli::common::resolve_format;
use crate::cli::rules::RuleListing;
use crate::cli::{check, Command};
use crate::project::{OutputFormat, Project};
use crate::syntax::{SyntaxError, RULES};
use clap::{App, Arg, ArgMatches, ArgSettings};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs, io, process};

/// Create an empty scratch directory for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("rvsyntax-cli-{}-{}", process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    dir
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();

    path
}

/// Parse the arguments of a `check` invocation.
fn check_args<'a>(files: &[&Path]) -> ArgMatches<'a> {
    let mut argv = vec!["check".to_string()];
    argv.extend(files.iter().map(|f| f.to_str().unwrap().to_string()));

    Command::Check.into_clap_subcommand().get_matches_from(argv)
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let mut app = App::new("rvsyntax").arg(
        Arg::with_name("format")
            .long("format")
            .takes_value(true)
            .set(ArgSettings::Global),
    );

    for cmd in Command::enumerate() {
        app = app.subcommand(cmd.into_clap_subcommand());
    }

    app
}

#[test]
fn commands_round_trip_through_clap() {
    for cmd in Command::enumerate() {
        let name = cmd.into_clap_subcommand().get_name().to_string();
        assert_eq!(Command::from_str(&name), Ok(cmd));
    }

    assert_eq!(Command::from_str("assemble"), Err(()));
}

#[test]
fn lint_is_an_alias_for_check() {
    let matches = app().get_matches_from(vec!["rvsyntax", "lint", "main.s"]);
    let (name, sub) = matches.subcommand();

    assert_eq!(Command::from_str(name), Ok(Command::Check));
    assert_eq!(sub.and_then(|m| m.value_of("files")), Some("main.s"));
}

#[test]
fn format_from_command_line_beats_project() {
    let project = Project::default();

    let matches = app().get_matches_from(vec!["rvsyntax", "rules", "--format", "json"]);
    let (_, sub) = matches.subcommand();
    assert_eq!(
        resolve_format(&matches, sub, &project).unwrap(),
        OutputFormat::Json
    );

    let matches = app().get_matches_from(vec!["rvsyntax", "rules"]);
    let (_, sub) = matches.subcommand();
    assert_eq!(
        resolve_format(&matches, sub, &project).unwrap(),
        OutputFormat::Text
    );

    let matches = app().get_matches_from(vec!["rvsyntax", "--format", "xml", "rules"]);
    let (_, sub) = matches.subcommand();
    assert!(resolve_format(&matches, sub, &project).is_err());
}

#[test]
fn sources_report_failures_in_line_order() {
    let source = "\
main:
    li a0, 100
    addi a0, a0, 3000
    foo a0

loop: add a0, a0, a1
    lw a0, x(sp)
";

    assert_eq!(
        check_source(source),
        vec![
            (
                3,
                SyntaxError::ImmediateOutOfRange {
                    token: "3000".to_string(),
                    lower: -2048,
                    upper: 2047
                }
            ),
            (4, SyntaxError::UnknownInstruction),
            (7, SyntaxError::InvalidImmediateFormat("x".to_string())),
        ]
    );
}

#[test]
fn clean_sources_report_nothing() {
    assert!(check_source("").is_empty());
    assert!(check_source("nop\r\necall\r\n").is_empty());
}

#[test]
fn check_fails_with_invalid_data_on_bad_lines() {
    let dir = scratch_dir("bad");
    let good = write_file(&dir, "good.s", "main:\n    li a0, 100\n    ecall\n");
    let bad = write_file(&dir, "bad.s", "    nop\n    foo a0\n");
    let project = Project::default();

    assert!(check(&project, OutputFormat::Text, &check_args(&[good.as_path()])).is_ok());

    let both = check_args(&[good.as_path(), bad.as_path()]);
    let err = check(&project, OutputFormat::Text, &both).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);

    let err = check(&project, OutputFormat::Json, &check_args(&[bad.as_path()])).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn check_needs_some_sources() {
    let err = check(&Project::default(), OutputFormat::Text, &check_args(&[])).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

    let dir = scratch_dir("missing");
    let err = check(
        &Project::default(),
        OutputFormat::Text,
        &check_args(&[dir.join("absent.s").as_path()]),
    )
    .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn check_falls_back_to_project_sources() {
    let dir = scratch_dir("project");
    write_file(&dir, "main.s", "    j done\ndone:\n");
    write_file(&dir, "util.s", "    addi a0, a0, 3000\n");

    let clean = write_file(&dir, "clean.json", r#"{ "sources": ["main.s"] }"#);
    let clean = Project::read(clean.to_str().unwrap()).unwrap();
    assert_eq!(
        clean.iter_source_paths().collect::<Vec<_>>(),
        vec![dir.join("main.s")]
    );
    assert!(check(&clean, OutputFormat::Text, &check_args(&[])).is_ok());

    let dirty = write_file(&dir, "dirty.json", r#"{ "sources": ["main.s", "util.s"] }"#);
    let dirty = Project::read(dirty.to_str().unwrap()).unwrap();
    let err = check(&dirty, OutputFormat::Text, &check_args(&[])).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);

    // Files on the command line replace the project's list.
    let main = dir.join("main.s");
    assert!(check(&dirty, OutputFormat::Text, &check_args(&[main.as_path()])).is_ok());
}

#[test]
fn diagnostics_serialize_with_location_and_message() {
    let dir = scratch_dir("json");
    let path = write_file(&dir, "main.s", "nop\nfoo\nlw a0, x(sp)\n");
    let file = path.display().to_string();

    assert_eq!(
        serde_json::to_value(diagnose(&path).unwrap()).unwrap(),
        serde_json::json!([
            {
                "file": file,
                "line": 2,
                "message": "Unknown instruction",
                "error": "UnknownInstruction",
            },
            {
                "file": file,
                "line": 3,
                "message": "Invalid immediate field - got x",
                "error": { "InvalidImmediateFormat": "x" },
            },
        ])
    );
}

#[test]
fn rule_listing_includes_field_count() {
    let sw = RULES.get("sw").unwrap();

    assert_eq!(
        serde_json::to_value(RuleListing::from(sw)).unwrap(),
        serde_json::json!({
            "mnemonic": "sw",
            "expected_fields": 4,
            "operands": [
                { "kind": "Register" },
                { "kind": "Immediate", "lower": -2048, "upper": 2047 },
                { "kind": "Register" },
            ],
        })
    );

    let jr = RULES.get("jr").unwrap();
    assert_eq!(
        serde_json::to_value(RuleListing::from(jr)).unwrap()["expected_fields"],
        serde_json::json!(2)
    );
}
