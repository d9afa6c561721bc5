//! Loading of the table between the two bridge-language versions.

use log::{debug, info, warn};

use crate::alignment::AlignmentPair;
use crate::config::AlignmentConfig;
use crate::error::{LexalignError, Result};
use crate::loader::LoadStats;
use crate::loader::sense_key::{parse_offset_key, split_row};
use crate::resource::{ResourceLines, ResourceLoader};

/// Load the version-bridge pair from the resource named in `config`.
///
/// The forward table maps the first column (newer edition) to the second
/// (older edition). The resource must exist.
pub fn load_version_bridge(
    loader: &dyn ResourceLoader,
    config: &AlignmentConfig,
) -> Result<AlignmentPair> {
    let name = &config.version_bridge_resource;
    let reader = loader.open_required(name)?;
    let (pair, stats) = parse_version_bridge(ResourceLines::new(name.as_str(), reader))?;

    info!(
        "Loaded version bridge {} => {} from '{}': {} mappings",
        config.newer_bridge(),
        config.older_bridge(),
        name,
        stats.loaded
    );
    if stats.skipped > 0 {
        warn!(
            "Skipped {} rows with mismatched part of speech in '{}'",
            stats.skipped, name
        );
    }
    Ok(pair)
}

/// Parse `<pos><offset>,<pos><offset>` rows into a linked pair.
///
/// Rows whose two tags disagree are skipped; any other format violation fails.
pub fn parse_version_bridge(lines: ResourceLines) -> Result<(AlignmentPair, LoadStats)> {
    let name = lines.name().to_string();
    let mut pair = AlignmentPair::direct();
    let mut stats = LoadStats::default();

    for line in lines {
        let (line_number, line) = line?;
        let malformed = |msg: String| LexalignError::malformed(&name, line_number, msg);

        let (first, second) = split_row(&line).map_err(malformed)?;
        let first = parse_offset_key(first).map_err(malformed)?;
        let second = parse_offset_key(second).map_err(malformed)?;

        if first.pos != second.pos {
            debug!("{name}:{line_number}: part of speech mismatch, skipping '{line}'");
            stats.skipped += 1;
            continue;
        }

        pair.add_mapping(first.pos, first.offset, second.offset, true)?;
        stats.loaded += 1;
    }

    Ok((pair, stats))
}
