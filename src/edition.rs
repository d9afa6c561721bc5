//! Dictionary edition descriptors and the directed pair used as cache key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LexalignError, Result};

/// Identifies one dictionary edition: publisher, language and version number.
///
/// Two descriptors denote the same edition only when all three fields match.
/// Editions sharing language and version but published by different
/// organizations are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditionDescriptor {
    publisher: String,
    language: String,
    number: String,
}

impl EditionDescriptor {
    /// Create a descriptor, formatting the version number with one decimal digit.
    pub fn new<P: Into<String>, L: Into<String>>(publisher: P, language: L, number: f32) -> Self {
        Self::from_parts(publisher, language, format!("{number:.1}"))
    }

    /// Create a descriptor from an already formatted version number.
    pub fn from_parts<P: Into<String>, L: Into<String>, N: Into<String>>(
        publisher: P,
        language: L,
        number: N,
    ) -> Self {
        EditionDescriptor {
            publisher: publisher.into(),
            language: language.into(),
            number: number.into(),
        }
    }

    /// Publisher of the edition, e.g. `Princeton`.
    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// ISO 639-2/3 three-letter language code, e.g. `eng`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Version number with one decimal digit, e.g. `3.0`.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Whether both editions are written in the same language.
    pub fn same_language(&self, other: &EditionDescriptor) -> bool {
        self.language == other.language
    }
}

impl fmt::Display for EditionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.publisher, self.language, self.number)
    }
}

impl FromStr for EditionDescriptor {
    type Err = LexalignError;

    /// Parse the canonical `publisher-language-number` form.
    ///
    /// The publisher may itself contain `-`, so the string is split from the right.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.rsplitn(3, '-');
        let number = parts.next().unwrap_or_default();
        let language = parts.next().unwrap_or_default();
        let publisher = parts.next().unwrap_or_default();

        if publisher.is_empty() || language.is_empty() || number.is_empty() {
            return Err(LexalignError::invalid_argument(format!(
                "edition must look like publisher-language-number, got '{s}'"
            )));
        }

        let number = match number.parse::<f32>() {
            Ok(value) => format!("{value:.1}"),
            Err(_) => {
                return Err(LexalignError::invalid_argument(format!(
                    "invalid edition version number '{number}'"
                )));
            }
        };

        Ok(EditionDescriptor::from_parts(publisher, language, number))
    }
}

/// A directed pair of editions, the key under which an alignment table is cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditionPair {
    /// Edition the offsets are mapped from.
    pub source: EditionDescriptor,
    /// Edition the offsets are mapped into.
    pub target: EditionDescriptor,
}

impl EditionPair {
    /// Create a new directed pair.
    pub fn new(source: EditionDescriptor, target: EditionDescriptor) -> Self {
        EditionPair { source, target }
    }

    /// The same pair in the opposite direction.
    pub fn reversed(&self) -> Self {
        EditionPair {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    /// Whether source and target denote the same edition.
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for EditionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.source, self.target)
    }
}
