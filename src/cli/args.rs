//! Command line argument parsing for the lexalign CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::edition::EditionDescriptor;
use crate::pos::PartOfSpeech;

/// lexalign - map WordNet synsets across editions and languages
#[derive(Parser, Debug, Clone)]
#[command(name = "lexalign")]
#[command(about = "Map WordNet synset offsets across editions and languages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexalignArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Directory holding the bundled resources
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "LEXALIGN_RESOURCES",
        default_value = "resources",
        global = true
    )]
    pub resources: PathBuf,

    /// Configuration file (JSON); defaults apply when omitted
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexalignArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Map offsets from one edition into another
    Lookup(LookupArgs),

    /// Show which tables connect two editions
    Plan(PlanArgs),

    /// Check a language's data files against their own byte offsets
    #[command(name = "verify-data")]
    VerifyData(VerifyDataArgs),
}

impl Command {
    /// Name of the subcommand as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Lookup(_) => "lookup",
            Command::Plan(_) => "plan",
            Command::VerifyData(_) => "verify-data",
        }
    }
}

/// Arguments for mapping offsets
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Source edition (publisher-language-version, e.g. Princeton-eng-3.1)
    #[arg(long, value_name = "EDITION")]
    pub from: EditionDescriptor,

    /// Target edition (publisher-language-version, e.g. MCR-spa-3.0)
    #[arg(long, value_name = "EDITION")]
    pub to: EditionDescriptor,

    /// Part of speech of the offsets
    #[arg(short, long, value_enum, default_value = "noun")]
    pub pos: PartOfSpeech,

    /// Offsets to map
    #[arg(value_name = "OFFSET", required = true)]
    pub offsets: Vec<u64>,
}

/// Arguments for showing a build plan
#[derive(Parser, Debug, Clone)]
pub struct PlanArgs {
    /// Source edition
    #[arg(long, value_name = "EDITION")]
    pub from: EditionDescriptor,

    /// Target edition
    #[arg(long, value_name = "EDITION")]
    pub to: EditionDescriptor,
}

/// Arguments for verifying data files
#[derive(Parser, Debug, Clone)]
pub struct VerifyDataArgs {
    /// ISO 639-3 language code of the data files
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
