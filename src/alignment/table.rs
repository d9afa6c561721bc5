//! Offset-to-offset alignment tables.

use std::sync::Arc;

use ahash::AHashMap;

use crate::error::{LexalignError, Result};
use crate::pos::PartOfSpeech;

/// A lookup structure mapping edition-local offsets of one edition into another.
///
/// A table is either loaded directly from a resource or derived by chaining
/// two other tables through an intermediate edition.
#[derive(Debug, Clone)]
pub enum AlignmentTable {
    /// Backed by in-memory maps, one per part of speech.
    Direct(DirectTable),
    /// Functional composition of two shared tables.
    Composed(ComposedTable),
}

impl AlignmentTable {
    /// An empty direct table.
    pub fn direct() -> Self {
        AlignmentTable::Direct(DirectTable::new())
    }

    /// Map an offset, returning `None` when the table has no entry for it.
    pub fn lookup(&self, pos: PartOfSpeech, offset: u64) -> Option<u64> {
        match self {
            AlignmentTable::Direct(table) => table.lookup(pos, offset),
            AlignmentTable::Composed(table) => table.lookup(pos, offset),
        }
    }

    /// Insert a single mapping.
    ///
    /// Composed tables are derived entirely from their constituents and reject
    /// direct mutation.
    pub fn add_mapping(&mut self, pos: PartOfSpeech, first: u64, second: u64) -> Result<()> {
        match self {
            AlignmentTable::Direct(table) => {
                table.insert(pos, first, second);
                Ok(())
            }
            AlignmentTable::Composed(_) => Err(LexalignError::unsupported(
                "mappings cannot be added to a composed alignment table",
            )),
        }
    }

    /// Whether this table chains two other tables.
    pub fn is_composed(&self) -> bool {
        matches!(self, AlignmentTable::Composed(_))
    }

    /// Number of lookups performed per translation (1 for direct, 2 for composed).
    pub fn depth(&self) -> usize {
        match self {
            AlignmentTable::Direct(_) => 1,
            AlignmentTable::Composed(_) => 2,
        }
    }

    /// Number of stored mappings; for a composed table, the entries of its first hop.
    pub fn len(&self) -> usize {
        match self {
            AlignmentTable::Direct(table) => table.len(),
            AlignmentTable::Composed(table) => table.first().len(),
        }
    }

    /// Whether the table holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Alignment table backed by one hash map per part of speech.
#[derive(Debug, Clone, Default)]
pub struct DirectTable {
    maps: [AHashMap<u64, u64>; 4],
}

impl DirectTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the mapping `first -> second` for `pos`.
    pub fn insert(&mut self, pos: PartOfSpeech, first: u64, second: u64) {
        self.maps[pos.index()].insert(first, second);
    }

    /// Look up `offset` within the `pos` namespace.
    pub fn lookup(&self, pos: PartOfSpeech, offset: u64) -> Option<u64> {
        self.maps[pos.index()].get(&offset).copied()
    }

    /// Total number of mappings across all parts of speech.
    pub fn len(&self) -> usize {
        self.maps.iter().map(|map| map.len()).sum()
    }

    /// Whether no mappings are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Alignment table that looks up in `first`, then feeds the hit into `second`.
#[derive(Debug, Clone)]
pub struct ComposedTable {
    first: Arc<AlignmentTable>,
    second: Arc<AlignmentTable>,
}

impl ComposedTable {
    /// Chain two tables. Neither constituent may itself be composed.
    pub fn new(first: Arc<AlignmentTable>, second: Arc<AlignmentTable>) -> Result<Self> {
        if first.is_composed() || second.is_composed() {
            return Err(LexalignError::unsupported(
                "alignment tables compose at most one level deep",
            ));
        }
        Ok(ComposedTable { first, second })
    }

    /// The table applied first.
    pub fn first(&self) -> &Arc<AlignmentTable> {
        &self.first
    }

    /// The table applied to the intermediate offset.
    pub fn second(&self) -> &Arc<AlignmentTable> {
        &self.second
    }

    /// Look up through both hops; a miss in the first hop never touches the second.
    pub fn lookup(&self, pos: PartOfSpeech, offset: u64) -> Option<u64> {
        let intermediate = self.first.lookup(pos, offset)?;
        self.second.lookup(pos, intermediate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct(entries: &[(PartOfSpeech, u64, u64)]) -> Arc<AlignmentTable> {
        let mut table = AlignmentTable::direct();
        for &(pos, first, second) in entries {
            table.add_mapping(pos, first, second).unwrap();
        }
        Arc::new(table)
    }

    #[test]
    fn test_direct_lookup() {
        let table = direct(&[(PartOfSpeech::Noun, 0, 17), (PartOfSpeech::Noun, 5, 9)]);

        assert_eq!(table.lookup(PartOfSpeech::Noun, 0), Some(17));
        assert_eq!(table.lookup(PartOfSpeech::Noun, 5), Some(9));
        assert_eq!(table.lookup(PartOfSpeech::Noun, 9), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.depth(), 1);
    }

    #[test]
    fn test_part_of_speech_isolation() {
        let table = direct(&[(PartOfSpeech::Noun, 100, 200)]);

        assert_eq!(table.lookup(PartOfSpeech::Noun, 100), Some(200));
        assert_eq!(table.lookup(PartOfSpeech::Verb, 100), None);
        assert_eq!(table.lookup(PartOfSpeech::Adjective, 100), None);
        assert_eq!(table.lookup(PartOfSpeech::Adverb, 100), None);
    }

    #[test]
    fn test_composition_chains_lookups() {
        let x_to_y = direct(&[(PartOfSpeech::Noun, 1, 10), (PartOfSpeech::Noun, 2, 20)]);
        let y_to_z = direct(&[(PartOfSpeech::Noun, 10, 100)]);
        let composed = ComposedTable::new(x_to_y.clone(), y_to_z.clone()).unwrap();

        for offset in [1, 2, 3] {
            let expected = x_to_y
                .lookup(PartOfSpeech::Noun, offset)
                .and_then(|mid| y_to_z.lookup(PartOfSpeech::Noun, mid));
            assert_eq!(composed.lookup(PartOfSpeech::Noun, offset), expected);
        }
        assert_eq!(composed.lookup(PartOfSpeech::Noun, 1), Some(100));
        // second hop misses
        assert_eq!(composed.lookup(PartOfSpeech::Noun, 2), None);
        // first hop misses
        assert_eq!(composed.lookup(PartOfSpeech::Noun, 3), None);
    }

    #[test]
    fn test_composed_rejects_mutation() {
        let a = direct(&[(PartOfSpeech::Verb, 1, 2)]);
        let b = direct(&[(PartOfSpeech::Verb, 2, 3)]);
        let mut table = AlignmentTable::Composed(ComposedTable::new(a, b).unwrap());

        let err = table.add_mapping(PartOfSpeech::Verb, 5, 6).unwrap_err();
        assert!(matches!(err, LexalignError::UnsupportedOperation(_)));
        assert_eq!(table.lookup(PartOfSpeech::Verb, 5), None);
        assert_eq!(table.depth(), 2);
    }

    #[test]
    fn test_composition_depth_limited() {
        let a = direct(&[(PartOfSpeech::Noun, 1, 2)]);
        let b = direct(&[(PartOfSpeech::Noun, 2, 3)]);
        let composed = Arc::new(AlignmentTable::Composed(
            ComposedTable::new(a.clone(), b).unwrap(),
        ));

        assert!(ComposedTable::new(composed.clone(), a.clone()).is_err());
        assert!(ComposedTable::new(a, composed).is_err());
    }
}
