//! Command line interface definition

use std::path::PathBuf;

use clap::Parser;

/// Interactive search prompt with server-backed autocomplete suggestions.
///
/// Type to fetch suggestions from the server, pick one with the mouse, Tab or
/// the arrow keys, then press Enter to print the accepted query to stdout.
#[derive(Debug, Parser)]
#[command(name = "typeahead", version, about)]
pub struct Cli {
    /// Base URL of the suggestion server; the fixed /autocomplete path is appended
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Path to the config file (defaults to <config dir>/typeahead/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
