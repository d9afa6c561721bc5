//! Command implementations for the lexalign CLI.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};

use crate::cache::TableCache;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AlignmentConfig;
use crate::error::Result;
use crate::loader::PosOffsetIndex;
use crate::pos::PartOfSpeech;
use crate::resolver::{Resolution, TableResolver};
use crate::resource::DirectoryResourceLoader;

/// Execute a CLI command.
pub fn execute_command(args: LexalignArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Lookup(lookup_args) => lookup_offsets(lookup_args.clone(), config, &args),
        Command::Plan(plan_args) => show_plan(plan_args.clone(), config, &args),
        Command::VerifyData(verify_args) => verify_data(verify_args.clone(), config, &args),
    }
}

/// Read the configuration file if one was given, otherwise use defaults.
fn load_config(args: &LexalignArgs) -> Result<AlignmentConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            AlignmentConfig::from_file(path)
        }
        None => Ok(AlignmentConfig::default()),
    }
}

fn open_resources(
    config: &AlignmentConfig,
    args: &LexalignArgs,
) -> Result<DirectoryResourceLoader> {
    let loader = DirectoryResourceLoader::new(&args.resources, config.buffer_size)?;
    debug!("Reading resources from {}", loader.root().display());
    Ok(loader)
}

fn build_resolver(config: AlignmentConfig, args: &LexalignArgs) -> Result<TableResolver> {
    let loader = open_resources(&config, args)?;
    TableResolver::new(Arc::new(TableCache::new()), Arc::new(loader), config)
}

/// Map offsets from one edition into another.
fn lookup_offsets(
    args: LookupArgs,
    config: AlignmentConfig,
    cli_args: &LexalignArgs,
) -> Result<()> {
    let resolver = build_resolver(config, cli_args)?;
    let results = lookup_results(&resolver, &args)?;

    let mapped = results
        .hits
        .iter()
        .filter(|hit| hit.target.is_some())
        .count();
    info!(
        "Mapped {mapped} of {} offsets in {}ms",
        results.hits.len(),
        results.duration_ms
    );

    output_result("Lookup completed", &results, cli_args)
}

/// Resolve the edition pair and map every requested offset.
fn lookup_results(resolver: &TableResolver, args: &LookupArgs) -> Result<LookupResults> {
    let start = Instant::now();
    let resolution = resolver.resolve(&args.from, &args.to)?;
    let hits = args
        .offsets
        .iter()
        .map(|&source| LookupHit {
            source,
            target: resolution.map_offset(args.pos, source),
        })
        .collect();

    Ok(LookupResults {
        from: args.from.to_string(),
        to: args.to.to_string(),
        pos: args.pos,
        identity: matches!(resolution, Resolution::Identity),
        hits,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Show the tables needed to connect two editions without loading anything.
fn show_plan(args: PlanArgs, config: AlignmentConfig, cli_args: &LexalignArgs) -> Result<()> {
    let resolver = build_resolver(config, cli_args)?;
    output_result("Build plan", &plan_results(&resolver, &args), cli_args)
}

fn plan_results(resolver: &TableResolver, args: &PlanArgs) -> PlanResults {
    let plan = resolver.plan(&args.from, &args.to);
    PlanResults {
        from: args.from.to_string(),
        to: args.to.to_string(),
        available: args.from == args.to || !plan.is_empty(),
        steps: plan.steps().to_vec(),
    }
}

/// Scan a language's data files, checking every entry's offset.
fn verify_data(
    args: VerifyDataArgs,
    config: AlignmentConfig,
    cli_args: &LexalignArgs,
) -> Result<()> {
    config.validate()?;
    let loader = open_resources(&config, cli_args)?;

    let start = Instant::now();
    let index = PosOffsetIndex::build(&loader, &args.language, &config)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        "Data files verified",
        &DataVerification {
            language: args.language,
            nouns: index.len(PartOfSpeech::Noun),
            verbs: index.len(PartOfSpeech::Verb),
            adjectives: index.len(PartOfSpeech::Adjective),
            adverbs: index.len(PartOfSpeech::Adverb),
            total: index.total(),
            duration_ms,
        },
        cli_args,
    )
}
