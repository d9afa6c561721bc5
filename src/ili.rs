//! Public entry points for mapping synsets across editions and languages.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexalign::prelude::*;
//!
//! let resources = MemoryResourceLoader::new()
//!     .with_resource("alignment/wn31-wn30.csv", "n07558676,n07543288\n");
//! let index = InterLingualIndex::new(Arc::new(resources), AlignmentConfig::default())?;
//!
//! let wn31 = index.resolver().config().newer_bridge();
//! let wn30 = index.resolver().config().older_bridge();
//! let resolution = index.resolver().resolve(&wn31, &wn30)?;
//!
//! assert_eq!(resolution.map_offset(PartOfSpeech::Noun, 7558676), Some(7543288));
//! # Ok::<(), lexalign::error::LexalignError>(())
//! ```

use std::sync::Arc;

use log::debug;

use crate::cache::TableCache;
use crate::config::AlignmentConfig;
use crate::dictionary::{Dictionary, DictionaryOpener, DictionarySource};
use crate::error::Result;
use crate::mapper::SynsetMapper;
use crate::resolver::TableResolver;
use crate::resource::ResourceLoader;

/// Maps synsets between dictionary editions, within and across languages.
#[derive(Debug, Clone)]
pub struct InterLingualIndex {
    resolver: TableResolver,
}

impl InterLingualIndex {
    /// Create an index with its own, empty table cache.
    pub fn new(loader: Arc<dyn ResourceLoader>, config: AlignmentConfig) -> Result<Self> {
        Self::with_cache(Arc::new(TableCache::new()), loader, config)
    }

    /// Create an index storing tables in `cache`.
    pub fn with_cache(
        cache: Arc<TableCache>,
        loader: Arc<dyn ResourceLoader>,
        config: AlignmentConfig,
    ) -> Result<Self> {
        Ok(InterLingualIndex {
            resolver: TableResolver::new(cache, loader, config)?,
        })
    }

    /// Create an index backed by the process-wide cache.
    pub fn shared(loader: Arc<dyn ResourceLoader>, config: AlignmentConfig) -> Result<Self> {
        Self::with_cache(TableCache::global(), loader, config)
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &TableResolver {
        &self.resolver
    }

    /// Open a dictionary for `language` from a known prepackaged source.
    ///
    /// `source_tag` is one of `wn31`, `wn31/map`, `wn30`, `wn21` or `mcr30`;
    /// `language` is an ISO 639-3 code such as `eng` or `spa`.
    pub fn get_dictionary<O: DictionaryOpener>(
        opener: &O,
        source_tag: &str,
        language: &str,
    ) -> Result<O::Dictionary> {
        let source: DictionarySource = source_tag.parse()?;
        let path = source.properties_path(language);
        debug!("Opening dictionary '{source}' for '{language}' from '{path}'");
        opener.open(&path)
    }

    /// Load a mapper from `source` into `target`, reusable for many synsets.
    ///
    /// Fails with [`crate::error::LexalignError::UnavailableMapping`] when the
    /// two editions cannot be aligned.
    pub fn load_mapper<D: Dictionary>(
        &self,
        source: &D,
        target: &Arc<D>,
    ) -> Result<SynsetMapper<D>> {
        let resolution = self.resolver.resolve(&source.edition(), &target.edition())?;
        Ok(SynsetMapper::from_resolution(resolution, target.clone()))
    }

    /// Map one synset of `source` into `target`.
    ///
    /// `Ok(None)` means the target edition has no equivalent sense.
    pub fn map_synset<D: Dictionary>(
        &self,
        source: &D,
        synset: &D::Synset,
        target: &Arc<D>,
    ) -> Result<Option<D::Synset>> {
        self.load_mapper(source, target)?.map_synset(synset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Synset;
    use crate::edition::EditionDescriptor;
    use crate::error::LexalignError;
    use crate::pos::PartOfSpeech;
    use crate::resource::MemoryResourceLoader;

    #[derive(Debug, Clone, PartialEq)]
    struct Sense(PartOfSpeech, u64);

    impl Synset for Sense {
        fn part_of_speech(&self) -> PartOfSpeech {
            self.0
        }

        fn offset(&self) -> u64 {
            self.1
        }
    }

    #[derive(Debug)]
    struct Edition(EditionDescriptor);

    impl Dictionary for Edition {
        type Synset = Sense;

        fn edition(&self) -> EditionDescriptor {
            self.0.clone()
        }

        fn synset_at(&self, pos: PartOfSpeech, offset: u64) -> Result<Sense> {
            Ok(Sense(pos, offset))
        }
    }

    struct Opener;

    impl DictionaryOpener for Opener {
        type Dictionary = Edition;

        fn open(&self, properties_path: &str) -> Result<Edition> {
            match properties_path {
                "wordnet/wn30/res_properties.xml" => {
                    Ok(Edition(EditionDescriptor::new("Princeton", "eng", 3.0)))
                }
                "mcr30/spa/res_properties.xml" => {
                    Ok(Edition(EditionDescriptor::new("MCR", "spa", 3.0)))
                }
                other => Err(LexalignError::dictionary(format!("no dictionary at {other}"))),
            }
        }
    }

    fn empty_index() -> InterLingualIndex {
        InterLingualIndex::new(Arc::new(MemoryResourceLoader::new()), AlignmentConfig::default())
            .unwrap()
    }

    #[test]
    fn test_get_dictionary() {
        let wn30 = InterLingualIndex::get_dictionary(&Opener, "wn30", "eng").unwrap();
        assert_eq!(wn30.edition().to_string(), "Princeton-eng-3.0");

        let spa = InterLingualIndex::get_dictionary(&Opener, "mcr30", "spa").unwrap();
        assert_eq!(spa.edition().language(), "spa");

        assert!(InterLingualIndex::get_dictionary(&Opener, "wn21", "eng").is_err());
        assert!(InterLingualIndex::get_dictionary(&Opener, "bogus", "eng").is_err());
    }

    #[test]
    fn test_same_dictionary_maps_to_itself() {
        let index = empty_index();
        let wn30 = Arc::new(Edition(EditionDescriptor::new("Princeton", "eng", 3.0)));
        let sense = Sense(PartOfSpeech::Noun, 14383252);

        let mapped = index.map_synset(wn30.as_ref(), &sense, &wn30).unwrap();
        assert_eq!(mapped, Some(sense));
        assert!(index.resolver().cache().is_empty());
    }

    #[test]
    fn test_unsupported_pair_fails_loudly() {
        let index = empty_index();
        let wn21 = Edition(EditionDescriptor::new("Princeton", "eng", 2.1));
        let wn30 = Arc::new(Edition(EditionDescriptor::new("Princeton", "eng", 3.0)));

        let err = index.load_mapper(&wn21, &wn30).unwrap_err();
        assert!(err.is_unavailable());
    }
}
