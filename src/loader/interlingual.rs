//! Loading of direct cross-language tables from an inter-lingual index.
//!
//! Each row pairs a sense of the other language, addressed by its position
//! in that language's offset list, with a raw offset of the older bridge
//! edition: `<pos>#<index>,<pos><offset>`.

use log::{debug, info, warn};

use crate::alignment::AlignmentPair;
use crate::config::AlignmentConfig;
use crate::error::{LexalignError, Result};
use crate::loader::LoadStats;
use crate::loader::offset_index::PosOffsetIndex;
use crate::loader::sense_key::{parse_index_key, parse_offset_key, split_row};
use crate::resource::{ResourceLines, ResourceLoader};

/// Load the pair between `language` and the older bridge edition.
///
/// The forward table maps the other language into the bridge edition.
/// Returns `Ok(None)` when no inter-lingual index exists for `language`.
pub fn load_interlingual(
    loader: &dyn ResourceLoader,
    config: &AlignmentConfig,
    language: &str,
) -> Result<Option<AlignmentPair>> {
    let name = config.interlingual_resource(language);
    let Some(reader) = loader.open(&name)? else {
        debug!("No inter-lingual index for '{language}' at '{name}'");
        return Ok(None);
    };

    let index = PosOffsetIndex::build(loader, language, config)?;
    let (pair, stats) = parse_interlingual(ResourceLines::new(name.as_str(), reader), &index)?;

    info!(
        "Loaded inter-lingual index {} => {} from '{}': {} mappings",
        config.foreign_edition(language),
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
    Ok(Some(pair))
}

/// Parse inter-lingual rows, resolving indices through `index`.
///
/// Rows whose two tags disagree are skipped. An index beyond the end of the
/// language's offset list is malformed.
pub fn parse_interlingual(
    lines: ResourceLines,
    index: &PosOffsetIndex,
) -> Result<(AlignmentPair, LoadStats)> {
    let name = lines.name().to_string();
    let mut pair = AlignmentPair::direct();
    let mut stats = LoadStats::default();

    for line in lines {
        let (line_number, line) = line?;
        let malformed = |msg: String| LexalignError::malformed(&name, line_number, msg);

        let (foreign, bridge) = split_row(&line).map_err(malformed)?;
        let foreign = parse_index_key(foreign).map_err(malformed)?;
        let bridge = parse_offset_key(bridge).map_err(malformed)?;

        if foreign.pos != bridge.pos {
            debug!("{name}:{line_number}: part of speech mismatch, skipping '{line}'");
            stats.skipped += 1;
            continue;
        }

        let offset = index.offset_at(foreign.pos, foreign.index).ok_or_else(|| {
            malformed(format!(
                "{} index {} out of range ({} entries)",
                foreign.pos,
                foreign.index,
                index.len(foreign.pos)
            ))
        })?;

        pair.add_mapping(foreign.pos, offset, bridge.offset, true)?;
        stats.loaded += 1;
    }

    Ok((pair, stats))
}
