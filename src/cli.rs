use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quickcalc")]
#[command(version, about = "Evaluate arithmetic and convert units")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Expression or conversion, e.g. "15% of 80" or "5km to miles".
    /// Reads lines from stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub input: Vec<String>,

    /// Print each result as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Copy the last successful result to the clipboard. On Linux the process
    /// keeps serving it until another program takes over the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show sample inputs with their results
    Examples,
    /// List the unit conversion table
    Units,
}
