//! Reusable synset translation between two dictionaries.

use std::fmt;
use std::sync::Arc;

use crate::alignment::AlignmentTable;
use crate::dictionary::{Dictionary, Synset};
use crate::error::Result;
use crate::pos::PartOfSpeech;
use crate::resolver::Resolution;

/// Maps synsets of a source dictionary into a target dictionary.
///
/// Cheap to clone and safe to keep: it only wraps a cached table and the
/// target dictionary.
pub enum SynsetMapper<D: Dictionary> {
    /// Source and target are the same edition.
    Identity,
    /// Offsets are translated through an alignment table.
    Aligned {
        table: Arc<AlignmentTable>,
        target: Arc<D>,
    },
}

impl<D: Dictionary> SynsetMapper<D> {
    /// Build a mapper from a resolution and the target dictionary.
    pub fn from_resolution(resolution: Resolution, target: Arc<D>) -> Self {
        match resolution {
            Resolution::Identity => SynsetMapper::Identity,
            Resolution::Aligned(table) => SynsetMapper::Aligned { table, target },
        }
    }

    /// Whether this mapper returns synsets unchanged.
    pub fn is_identity(&self) -> bool {
        matches!(self, SynsetMapper::Identity)
    }

    /// The table used for translation, if any.
    pub fn table(&self) -> Option<&Arc<AlignmentTable>> {
        match self {
            SynsetMapper::Identity => None,
            SynsetMapper::Aligned { table, .. } => Some(table),
        }
    }

    /// Translate an offset without resolving it into a synset.
    pub fn map_offset(&self, pos: PartOfSpeech, offset: u64) -> Option<u64> {
        match self {
            SynsetMapper::Identity => Some(offset),
            SynsetMapper::Aligned { table, .. } => table.lookup(pos, offset),
        }
    }

    /// Map a synset into the target dictionary.
    ///
    /// Returns `Ok(None)` when the target edition has no equivalent sense.
    /// Fails only if the target dictionary cannot produce the mapped synset.
    pub fn map_synset(&self, synset: &D::Synset) -> Result<Option<D::Synset>> {
        match self {
            SynsetMapper::Identity => Ok(Some(synset.clone())),
            SynsetMapper::Aligned { table, target } => {
                let pos = synset.part_of_speech();
                match table.lookup(pos, synset.offset()) {
                    Some(offset) => target.synset_at(pos, offset).map(Some),
                    None => Ok(None),
                }
            }
        }
    }
}

impl<D: Dictionary> Clone for SynsetMapper<D> {
    fn clone(&self) -> Self {
        match self {
            SynsetMapper::Identity => SynsetMapper::Identity,
            SynsetMapper::Aligned { table, target } => SynsetMapper::Aligned {
                table: table.clone(),
                target: target.clone(),
            },
        }
    }
}

impl<D: Dictionary> fmt::Debug for SynsetMapper<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynsetMapper::Identity => f.write_str("SynsetMapper::Identity"),
            SynsetMapper::Aligned { table, target } => f
                .debug_struct("SynsetMapper::Aligned")
                .field("depth", &table.depth())
                .field("target", &target.edition())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edition::EditionDescriptor;
    use crate::error::LexalignError;

    #[derive(Debug, Clone, PartialEq)]
    struct TestSynset {
        pos: PartOfSpeech,
        offset: u64,
    }

    impl Synset for TestSynset {
        fn part_of_speech(&self) -> PartOfSpeech {
            self.pos
        }

        fn offset(&self) -> u64 {
            self.offset
        }
    }

    /// Holds synsets at offsets below 1000 only.
    struct TestDictionary;

    impl Dictionary for TestDictionary {
        type Synset = TestSynset;

        fn edition(&self) -> EditionDescriptor {
            EditionDescriptor::new("Test", "eng", 1.0)
        }

        fn synset_at(&self, pos: PartOfSpeech, offset: u64) -> Result<TestSynset> {
            if offset < 1000 {
                Ok(TestSynset { pos, offset })
            } else {
                Err(LexalignError::dictionary(format!("no synset at {offset}")))
            }
        }
    }

    fn mapper() -> SynsetMapper<TestDictionary> {
        let mut table = AlignmentTable::direct();
        table.add_mapping(PartOfSpeech::Noun, 1, 10).unwrap();
        table.add_mapping(PartOfSpeech::Noun, 2, 5000).unwrap();
        SynsetMapper::from_resolution(
            Resolution::Aligned(Arc::new(table)),
            Arc::new(TestDictionary),
        )
    }

    #[test]
    fn test_identity_returns_input() {
        let mapper: SynsetMapper<TestDictionary> =
            SynsetMapper::from_resolution(Resolution::Identity, Arc::new(TestDictionary));
        let synset = TestSynset {
            pos: PartOfSpeech::Verb,
            offset: 123456,
        };

        assert!(mapper.is_identity());
        assert_eq!(mapper.map_synset(&synset).unwrap(), Some(synset));
        assert!(mapper.table().is_none());
    }

    #[test]
    fn test_aligned_hit_and_miss() {
        let mapper = mapper();
        let hit = TestSynset {
            pos: PartOfSpeech::Noun,
            offset: 1,
        };
        let miss = TestSynset {
            pos: PartOfSpeech::Verb,
            offset: 1,
        };

        assert_eq!(
            mapper.map_synset(&hit).unwrap(),
            Some(TestSynset {
                pos: PartOfSpeech::Noun,
                offset: 10
            })
        );
        assert_eq!(mapper.map_synset(&miss).unwrap(), None);
        assert_eq!(mapper.map_offset(PartOfSpeech::Noun, 2), Some(5000));
    }

    #[test]
    fn test_target_failure_propagates() {
        let mapper = mapper().clone();
        let synset = TestSynset {
            pos: PartOfSpeech::Noun,
            offset: 2,
        };

        let err = mapper.map_synset(&synset).unwrap_err();
        assert!(matches!(err, LexalignError::Dictionary(_)));
        assert!(format!("{mapper:?}").contains("depth: 1"));
    }
}
