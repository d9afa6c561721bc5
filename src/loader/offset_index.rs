//! Per-part-of-speech offset lists built from a language's data files.
//!
//! Every entry of a data file starts with its own byte offset within that
//! file. Scanning a file while counting bytes both recovers the ordered list
//! of offsets (so a zero-based index can be turned into an offset) and checks
//! that the file agrees with itself.

use log::debug;
use rayon::prelude::*;

use crate::config::AlignmentConfig;
use crate::error::{LexalignError, Result};
use crate::loader::sense_key::parse_decimal;
use crate::pos::PartOfSpeech;
use crate::resource::{ResourceLines, ResourceLoader};

/// Ordered synset offsets of one language, per part of speech.
#[derive(Debug, Clone, Default)]
pub struct PosOffsetIndex {
    offsets: [Vec<u64>; 4],
}

impl PosOffsetIndex {
    /// Scan the four data files of `language`.
    ///
    /// The files are read in parallel. Each must exist.
    pub fn build(
        loader: &dyn ResourceLoader,
        language: &str,
        config: &AlignmentConfig,
    ) -> Result<Self> {
        let lists = PartOfSpeech::ALL
            .par_iter()
            .map(|&pos| {
                let name = config.data_file_resource(language, pos);
                let reader = loader.open_required(&name)?;
                scan_data_file(ResourceLines::new(name, reader), config.comment_marker)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut index = PosOffsetIndex::default();
        for (pos, list) in PartOfSpeech::ALL.into_iter().zip(lists) {
            debug!("Indexed {} {} offsets for '{}'", list.len(), pos, language);
            index.offsets[pos.index()] = list;
        }
        Ok(index)
    }

    /// Build from already known offset lists.
    pub fn from_lists(lists: [Vec<u64>; 4]) -> Self {
        PosOffsetIndex { offsets: lists }
    }

    /// The offset at zero-based position `index` for `pos`.
    pub fn offset_at(&self, pos: PartOfSpeech, index: usize) -> Option<u64> {
        self.offsets[pos.index()].get(index).copied()
    }

    /// Number of entries for `pos`.
    pub fn len(&self, pos: PartOfSpeech) -> usize {
        self.offsets[pos.index()].len()
    }

    /// Total number of entries.
    pub fn total(&self) -> usize {
        self.offsets.iter().map(Vec::len).sum()
    }
}

/// Scan one data file, returning its entry offsets in file order.
///
/// Each line advances the byte position by its UTF-8 length plus one for the
/// newline. Lines starting with `comment_marker` are skipped; every other line
/// must start with a decimal offset equal to the current position.
pub fn scan_data_file(lines: ResourceLines, comment_marker: char) -> Result<Vec<u64>> {
    let name = lines.name().to_string();
    let mut offsets = Vec::new();
    let mut position: u64 = 0;

    for line in lines {
        let (line_number, line) = line?;
        let line_start = position;
        position += line.len() as u64 + 1;

        if line.starts_with(comment_marker) {
            continue;
        }

        let reported = line
            .split_once(' ')
            .and_then(|(field, _)| parse_decimal(field))
            .ok_or_else(|| {
                LexalignError::malformed(&name, line_number, "entry does not start with an offset")
            })?;

        if reported != line_start {
            return Err(LexalignError::InconsistentOffset {
                resource: name,
                line: line_number,
                reported,
                actual: line_start,
            });
        }
        offsets.push(reported);
    }

    Ok(offsets)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::resource::MemoryResourceLoader;

    fn lines(content: &str) -> ResourceLines {
        ResourceLines::new("data.noun", Box::new(Cursor::new(content.to_string())))
    }

    /// Build data file content whose entries carry correct offsets.
    fn data_file(comments: &[&str], entries: &[&str]) -> String {
        let mut content = String::new();
        for comment in comments {
            content.push_str(comment);
            content.push('\n');
        }
        for entry in entries {
            let offset = format!("{:08}", content.len());
            content.push_str(&offset);
            content.push(' ');
            content.push_str(entry);
            content.push('\n');
        }
        content
    }

    #[test]
    fn test_scan_tracks_byte_positions() {
        let content = data_file(
            &["  1 This software and database", "  2 is provided"],
            &["03 n 01 entity 0 000 | that which exists", "03 n 01 año 0 000 | year"],
        );

        let offsets = scan_data_file(lines(&content), ' ').unwrap();
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets[0], 47);

        // every reported offset is where its line actually starts
        for offset in &offsets {
            let rest = &content.as_bytes()[*offset as usize..];
            let field = format!("{offset:08}");
            assert!(rest.starts_with(field.as_bytes()));
        }
    }

    #[test]
    fn test_multibyte_lines_count_bytes() {
        let content = data_file(&[], &["n ñandú", "n pingüino"]);
        let offsets = scan_data_file(lines(&content), ' ').unwrap();

        let first_len = "00000000 n ñandú".len() as u64 + 1;
        assert_eq!(offsets, vec![0, first_len]);
    }

    #[test]
    fn test_inconsistent_offset_is_fatal() {
        let content = "00000000 first\n00000003 second\n";
        let err = scan_data_file(lines(content), ' ').unwrap_err();

        match err {
            LexalignError::InconsistentOffset {
                line,
                reported,
                actual,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(reported, 3);
                assert_eq!(actual, 15);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_entry_without_offset_is_malformed() {
        let err = scan_data_file(lines("entity\n"), ' ').unwrap_err();
        assert!(matches!(err, LexalignError::MalformedResource { line: 1, .. }));

        let err = scan_data_file(lines("\n"), ' ').unwrap_err();
        assert!(matches!(err, LexalignError::MalformedResource { .. }));
    }

    #[test]
    fn test_build_reads_all_parts_of_speech() {
        let config = AlignmentConfig::default();
        let loader = MemoryResourceLoader::new();
        loader.insert("spa/data.noun", data_file(&["  license"], &["a", "b", "c"]));
        loader.insert("spa/data.verb", data_file(&[], &["x"]));
        loader.insert("spa/data.adj", data_file(&[], &[]));
        loader.insert("spa/data.adv", data_file(&[], &["y", "z"]));

        let index = PosOffsetIndex::build(&loader, "spa", &config).unwrap();

        assert_eq!(index.len(PartOfSpeech::Noun), 3);
        assert_eq!(index.len(PartOfSpeech::Verb), 1);
        assert_eq!(index.len(PartOfSpeech::Adjective), 0);
        assert_eq!(index.total(), 6);
        assert_eq!(index.offset_at(PartOfSpeech::Noun, 0), Some(10));
        assert_eq!(index.offset_at(PartOfSpeech::Verb, 0), Some(0));
        assert_eq!(index.offset_at(PartOfSpeech::Verb, 1), None);
    }

    #[test]
    fn test_build_requires_every_data_file() {
        let config = AlignmentConfig::default();
        let loader = MemoryResourceLoader::new();
        loader.insert("spa/data.noun", data_file(&[], &["a"]));

        let err = PosOffsetIndex::build(&loader, "spa", &config).unwrap_err();
        assert!(matches!(err, LexalignError::Resource(_)));
    }
}
