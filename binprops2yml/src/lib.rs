//! CLI logic for props2yml.
//!
//! Reads `.properties` input from a file, a directory or stdin, converts it
//! with [`libprops2yml`], and writes the YAML to stdout, a chosen file, or a
//! `.yml` file beside the input.

mod args;

pub use args::Args;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use libprops2yml::{convert_bytes, ConvertError};
use log::{debug, info};
use thiserror::Error;

/// Extension of files picked up from a directory.
const PROPERTIES_EXTENSION: &str = "properties";

/// Extension of files written with `--write`.
const YAML_EXTENSION: &str = "yml";

/// Label used in messages when reading stdin.
const STDIN_LABEL: &str = "<stdin>";

/// Errors reported by the command-line tool.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input could not be converted.
    #[error("{label}: {source}")]
    Convert {
        label: String,
        #[source]
        source: ConvertError,
    },

    /// `--check` found that the produced YAML does not load.
    #[error("{label}: produced invalid YAML: {source}")]
    InvalidYaml {
        label: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Arguments that cannot be combined.
    #[error("{0}")]
    Usage(String),

    /// Some files in a directory failed; each was already reported.
    #[error("{failed} of {total} files failed")]
    Failed { failed: usize, total: usize },
}

/// Run the tool with parsed arguments.
///
/// # Errors
///
/// Returns [`CliError`] for unreadable input, non-text input, failed
/// writes, YAML that does not pass `--check`, and invalid argument
/// combinations. In directory mode every failing file is printed to stderr
/// and a single [`CliError::Failed`] summarizes them.
pub fn run(args: &Args) -> Result<(), CliError> {
    match args.input_path() {
        Some(path) if path.is_dir() => process_directory(path, args),
        Some(path) => {
            let bytes = fs::read(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            process_input(&bytes, Some(path), args)
        }
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|source| CliError::Io {
                    path: PathBuf::from(STDIN_LABEL),
                    source,
                })?;
            process_input(&bytes, None, args)
        }
    }
}

/// Path written by `--write` for a given input.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(YAML_EXTENSION)
}

fn label_for(input: Option<&Path>) -> String {
    input
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| STDIN_LABEL.to_string())
}

/// Convert one input and, under `--check`, verify the result loads as YAML.
fn convert_input(bytes: &[u8], label: &str, check: bool) -> Result<String, CliError> {
    let output = convert_bytes(bytes).map_err(|source| CliError::Convert {
        label: label.to_string(),
        source,
    })?;
    debug!(input = label, bytes = bytes.len(), output_bytes = output.len(); "Converted");

    if check {
        serde_yaml::from_str::<serde_yaml::Value>(&output).map_err(|source| {
            CliError::InvalidYaml {
                label: label.to_string(),
                source,
            }
        })?;
    }
    Ok(output)
}

fn process_input(bytes: &[u8], input: Option<&Path>, args: &Args) -> Result<(), CliError> {
    let label = label_for(input);
    info!(input = label; "Converting properties");

    let output = convert_input(bytes, &label, args.check)?;
    if args.check {
        println!("{}: ok", label);
        return Ok(());
    }
    write_text_output(&output, args.output.as_deref(), args.write, input)
}

fn process_directory(dir: &Path, args: &Args) -> Result<(), CliError> {
    if args.output.is_some() {
        return Err(CliError::Usage(
            "--output cannot be used with directory input".to_string(),
        ));
    }
    if !args.write && !args.check {
        return Err(CliError::Usage(
            "directory input requires --write or --check".to_string(),
        ));
    }

    let files = properties_files(dir)?;
    info!(dir = dir.display().to_string(), files = files.len(); "Converting directory");

    let mut failed = 0;
    for path in &files {
        let result = fs::read(path)
            .map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })
            .and_then(|bytes| process_input(&bytes, Some(path.as_path()), args));
        if let Err(e) = result {
            eprintln!("{}", e);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

/// `.properties` files directly inside `dir`, sorted by name.
fn properties_files(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let entries = fs::read_dir(dir).map_err(|source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|e| e == PROPERTIES_EXTENSION)
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

fn write_text_output(
    output: &str,
    output_file: Option<&Path>,
    write_back: bool,
    input_file: Option<&Path>,
) -> Result<(), CliError> {
    let target = match (output_file, write_back, input_file) {
        (Some(path), _, _) => Some(path.to_path_buf()),
        (None, true, Some(input)) => Some(output_path_for(input)),
        (None, true, None) => {
            return Err(CliError::Usage(
                "--write requires an input file".to_string(),
            ))
        }
        (None, false, _) => None,
    };

    match target {
        Some(path) => {
            fs::write(&path, output).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            info!(output = path.display().to_string(); "Wrote YAML");
        }
        None => print!("{}", output),
    }
    Ok(())
}
