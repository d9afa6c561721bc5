//! lexalign CLI binary.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lexalign::cli::args::*;
use lexalign::cli::commands::*;

fn main() {
    let args = LexalignArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: LexalignArgs) -> anyhow::Result<()> {
    let command = args.command.name();
    let resources = args.resources.display().to_string();
    execute_command(args)
        .with_context(|| format!("{command} failed (resources: {resources})"))
}
