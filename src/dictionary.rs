//! Boundary to the host dictionary library.
//!
//! lexalign never reads dictionaries itself. It needs an edition descriptor
//! for each dictionary, the part of speech and offset of a synset, and a way
//! to turn a `(part of speech, offset)` pair back into a synset.

use std::fmt;
use std::str::FromStr;

use crate::edition::EditionDescriptor;
use crate::error::{LexalignError, Result};
use crate::pos::PartOfSpeech;

/// A synset handle of the host library.
pub trait Synset: Clone {
    /// Part of speech of the synset.
    fn part_of_speech(&self) -> PartOfSpeech;

    /// Offset of the synset within its edition.
    fn offset(&self) -> u64;
}

/// A loaded dictionary of the host library.
pub trait Dictionary: Send + Sync {
    /// The synset handle type.
    type Synset: Synset;

    /// The edition this dictionary represents.
    fn edition(&self) -> EditionDescriptor;

    /// The synset at `offset`. Fails if the dictionary has no such synset.
    fn synset_at(&self, pos: PartOfSpeech, offset: u64) -> Result<Self::Synset>;
}

/// Opens a dictionary from the path of its packaged properties file.
pub trait DictionaryOpener {
    /// The dictionary type produced.
    type Dictionary: Dictionary;

    /// Open the dictionary described at `properties_path`.
    fn open(&self, properties_path: &str) -> Result<Self::Dictionary>;
}

/// Known prepackaged dictionary sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionarySource {
    /// Princeton WordNet 3.1
    Wn31,
    /// Princeton WordNet 3.1, serialized map form
    Wn31Map,
    /// Princeton WordNet 3.0
    Wn30,
    /// Princeton WordNet 2.1
    Wn21,
    /// Multilingual Central Repository 3.0
    Mcr30,
}

impl DictionarySource {
    /// All known sources.
    pub const ALL: [DictionarySource; 5] = [
        DictionarySource::Wn31,
        DictionarySource::Wn31Map,
        DictionarySource::Wn30,
        DictionarySource::Wn21,
        DictionarySource::Mcr30,
    ];

    /// The tag naming this source, e.g. `wn31/map`.
    pub fn tag(self) -> &'static str {
        match self {
            DictionarySource::Wn31 => "wn31",
            DictionarySource::Wn31Map => "wn31/map",
            DictionarySource::Wn30 => "wn30",
            DictionarySource::Wn21 => "wn21",
            DictionarySource::Mcr30 => "mcr30",
        }
    }

    /// Path of the packaged properties file for `language`.
    ///
    /// English data is packaged under `wordnet/<tag>`, other languages under
    /// `<tag>/<language>`.
    pub fn properties_path(self, language: &str) -> String {
        if language == "eng" {
            format!("wordnet/{}/res_properties.xml", self.tag())
        } else {
            format!("{}/{}/res_properties.xml", self.tag(), language)
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DictionarySource {
    type Err = LexalignError;

    fn from_str(s: &str) -> Result<Self> {
        DictionarySource::ALL
            .into_iter()
            .find(|source| source.tag() == s)
            .ok_or_else(|| {
                LexalignError::invalid_argument(format!("unknown dictionary source '{s}'"))
            })
    }
}
