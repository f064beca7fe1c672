//! Command-line argument definitions for props2yml.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Convert Java-style .properties files to YAML
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file or directory; reads stdin when absent or `-`
    ///
    /// A directory converts every .properties file in it and needs
    /// --write or --check.
    pub input: Option<PathBuf>,

    /// Write output to the given file
    #[arg(short, long, conflicts_with = "write")]
    pub output: Option<PathBuf>,

    /// Write output beside each input, with the extension changed to .yml
    #[arg(short, long)]
    pub write: bool,

    /// Only verify that the input converts to well-formed YAML
    #[arg(long)]
    pub check: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Input path, treating `-` as stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}
