//! # csvcat
//!
//! A CLI tool for combining multiple CSV files into a single output file.
//!
//! ## Overview
//!
//! csvcat is built on top of csvcatlib and provides a command-line
//! interface for row-wise concatenation of delimited-text files. Input
//! files are given as arguments; when none are given, a native
//! file-selection dialog opens instead, so the tool works both in
//! scripts and by double-click-style invocation.
//!
//! ## Usage
//!
//! ```bash
//! # Combine two files; CombinedData.csv lands next to a.csv
//! csvcat a.csv b.csv
//!
//! # Pick the inputs through the native file dialog
//! csvcat
//!
//! # Name the output (a relative name is anchored to the first input)
//! csvcat a.csv b.csv --output merged.csv
//!
//! # Headerless inputs: every row is data, labels become column_0, column_1, ...
//! csvcat a.csv b.csv --no-header
//!
//! # Semicolon-delimited inputs and output
//! csvcat a.csv b.csv --delimiter ';'
//! ```

mod dialog;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use csvcatlib::{
    combine_files, resolve_output_path, write_table, CombineOptions, FileChooser, HeaderPolicy,
};

use crate::dialog::NativeChooser;

/// What a successful run produced.
#[derive(Debug)]
enum Outcome {
    /// The combined table was written to this path
    Written(PathBuf),
    /// The user dismissed the file dialog without selecting anything
    NothingSelected,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("csvcat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Combine multiple CSV files into a single output file")
        .arg(
            Arg::new("files")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("CSV files to combine; with none given, a file dialog opens"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf))
                .default_value("CombinedData.csv")
                .help("Output file name; a relative name is placed next to the first input"),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .action(ArgAction::SetTrue)
                .help("Treat inputs as headerless and synthesize column labels"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .default_value(",")
                .value_parser(parse_delimiter)
                .help("Field delimiter for reading inputs and writing the output"),
        )
}

/// Parse the delimiter argument into a single byte
fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            value
        )),
    }
}

/// Extract input file paths from matches
fn extract_files(matches: &ArgMatches) -> Vec<PathBuf> {
    matches
        .get_many::<PathBuf>("files")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Extract parsing and serialization options from matches
fn extract_options(matches: &ArgMatches) -> CombineOptions {
    let header_policy = if matches.get_flag("no-header") {
        HeaderPolicy::Synthesized
    } else {
        HeaderPolicy::FirstRow
    };
    let delimiter = matches.get_one::<u8>("delimiter").copied().unwrap_or(b',');

    CombineOptions::new()
        .header_policy(header_policy)
        .delimiter(delimiter)
}

/// Run the combine pipeline for parsed arguments.
///
/// The chooser is passed in rather than constructed here so the
/// selection can be driven without a display.
fn run(matches: &ArgMatches, chooser: &dyn FileChooser) -> anyhow::Result<Outcome> {
    let mut files = extract_files(matches);
    if files.is_empty() {
        files = chooser.choose_files()?;
    }
    if files.is_empty() {
        return Ok(Outcome::NothingSelected);
    }

    let options = extract_options(matches);
    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("CombinedData.csv"));

    let combined = combine_files(&files, &options)?;
    let target = resolve_output_path(&files, &output);
    write_table(&combined, &target, &options)?;

    Ok(Outcome::Written(target))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches, &NativeChooser) {
        Ok(Outcome::Written(path)) => {
            println!("Data has been combined and saved to {}.", path.display());
            ExitCode::SUCCESS
        }
        Ok(Outcome::NothingSelected) => {
            println!("No files selected. Exiting...");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvcatlib::StaticChooser;
    use std::fs;
    use tempfile::tempdir;

    fn matches_for(args: &[&str]) -> ArgMatches {
        let mut full = vec!["csvcat"];
        full.extend(args);
        build_command().try_get_matches_from(full).unwrap()
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("ab").is_err());
    }

    #[test]
    fn test_invalid_delimiter_rejected_at_parse_time() {
        let result = build_command().try_get_matches_from(vec!["csvcat", "-d", "ab"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_options_defaults() {
        let options = extract_options(&matches_for(&[]));
        assert_eq!(options.header_policy, HeaderPolicy::FirstRow);
        assert_eq!(options.delimiter, b',');
    }

    #[test]
    fn test_extract_options_flags() {
        let options = extract_options(&matches_for(&["--no-header", "-d", ";"]));
        assert_eq!(options.header_policy, HeaderPolicy::Synthesized);
        assert_eq!(options.delimiter, b';');
    }

    #[test]
    fn test_run_uses_chooser_when_no_files_given() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        fs::write(&a, "x,y\n1,2\n").unwrap();
        fs::write(&b, "x,y\n3,4\n").unwrap();

        let chooser = StaticChooser::new(vec![a, b]);
        let outcome = run(&matches_for(&[]), &chooser).unwrap();

        let expected = dir.path().join("CombinedData.csv");
        assert!(matches!(outcome, Outcome::Written(path) if path == expected));
        assert_eq!(
            fs::read_to_string(&expected).unwrap(),
            "x,y\n1,2\n3,4\n"
        );
    }

    #[test]
    fn test_run_empty_selection_writes_nothing() {
        let outcome = run(&matches_for(&[]), &StaticChooser::default()).unwrap();
        assert!(matches!(outcome, Outcome::NothingSelected));
    }

    #[test]
    fn test_run_prefers_explicit_files_over_chooser() {
        let dir = tempdir().unwrap();
        let given = dir.path().join("given.csv");
        let ignored = dir.path().join("ignored.csv");
        fs::write(&given, "x\n1\n").unwrap();
        fs::write(&ignored, "x\n9\n").unwrap();

        let chooser = StaticChooser::new(vec![ignored]);
        let given_str = given.to_str().unwrap();
        let outcome = run(&matches_for(&[given_str]), &chooser).unwrap();

        let expected = dir.path().join("CombinedData.csv");
        assert!(matches!(outcome, Outcome::Written(path) if path == expected));
        assert_eq!(fs::read_to_string(&expected).unwrap(), "x\n1\n");
    }
}
