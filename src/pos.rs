//! Part-of-speech categories.
//!
//! Each category has its own offset namespace: offsets are only ever compared
//! and mapped within the same part of speech.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{LexalignError, Result};

/// A WordNet part-of-speech category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// All categories, in data file order.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// The one-character key used in sense keys.
    pub fn key(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Parse a one-character key. Adjective satellites (`s`) are adjectives.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'n' => Some(PartOfSpeech::Noun),
            'v' => Some(PartOfSpeech::Verb),
            'a' | 's' => Some(PartOfSpeech::Adjective),
            'r' => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Lowercase label, e.g. `noun`.
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        }
    }

    /// Suffix of the per-category data file (`data.noun`, `data.adj`, ...).
    pub fn data_suffix(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Position in [`PartOfSpeech::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PartOfSpeech {
    type Err = LexalignError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        if let (Some(key), None) = (chars.next(), chars.next())
            && let Some(pos) = PartOfSpeech::from_key(key)
        {
            return Ok(pos);
        }

        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.label() == s || pos.data_suffix() == s)
            .ok_or_else(|| LexalignError::invalid_argument(format!("unknown part of speech '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(PartOfSpeech::from_key(pos.key()), Some(pos));
        }
        assert_eq!(PartOfSpeech::from_key('s'), Some(PartOfSpeech::Adjective));
        assert_eq!(PartOfSpeech::from_key('x'), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("n".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
        assert_eq!("adverb".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adverb);
        assert_eq!("adj".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adjective);
        assert!("pronoun".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, pos) in PartOfSpeech::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }
}
