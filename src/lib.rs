//! # lexalign
//!
//! Maps synsets between WordNet editions and between languages.
//!
//! Editions differ either in numbering (two releases of the English WordNet
//! assign different offsets to the same concept) or in language (a concept
//! has one offset in English and another in Spanish). lexalign builds
//! alignment tables between such editions from bundled resources, caches
//! them for the life of the process, and hands out reusable mappers.
//!
//! ## Features
//!
//! - Version bridge between two English WordNet releases
//! - Cross-language tables from an inter-lingual index
//! - Composition through the bridge language when no direct table exists
//! - Thread-safe, build-once table cache
//! - Pluggable resource loading and dictionary backends

pub mod alignment;
pub mod cache;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod edition;
pub mod error;
pub mod ili;
pub mod loader;
pub mod mapper;
pub mod pos;
pub mod resolver;
pub mod resource;

pub mod prelude {
    pub use crate::alignment::{AlignmentPair, AlignmentTable};
    pub use crate::cache::TableCache;
    pub use crate::config::AlignmentConfig;
    pub use crate::dictionary::{Dictionary, DictionaryOpener, DictionarySource, Synset};
    pub use crate::edition::{EditionDescriptor, EditionPair};
    pub use crate::error::{LexalignError, Result};
    pub use crate::ili::InterLingualIndex;
    pub use crate::mapper::SynsetMapper;
    pub use crate::pos::PartOfSpeech;
    pub use crate::resolver::{Resolution, TableResolver};
    pub use crate::resource::{DirectoryResourceLoader, MemoryResourceLoader, ResourceLoader};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
