//! Support matrix and resource naming for alignment loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::edition::EditionDescriptor;
use crate::error::{LexalignError, Result};
use crate::pos::PartOfSpeech;

/// Placeholder for the language code in resource templates.
pub const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// Placeholder for the part-of-speech data file suffix in resource templates.
pub const SUFFIX_PLACEHOLDER: &str = "{suffix}";

/// Configuration for resolving and loading alignment tables.
///
/// The defaults describe the bundled data: Princeton WordNet 3.0 and 3.1 as
/// the English bridge editions and MCR 3.0 for every other language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Language used as the hub for cross-language composition.
    pub bridge_language: String,

    /// Publisher of the bridge-language editions.
    pub bridge_publisher: String,

    /// Bridge version with a direct inter-lingual index to other languages.
    pub older_bridge_version: String,

    /// Bridge version reached from the older one through the version bridge.
    pub newer_bridge_version: String,

    /// Publisher of the non-bridge-language editions.
    pub foreign_publisher: String,

    /// Version of the non-bridge-language editions.
    pub foreign_version: String,

    /// Resource holding `(newer, older)` offset pairs between bridge versions.
    pub version_bridge_resource: String,

    /// Template for the per-language inter-lingual index resource.
    pub interlingual_template: String,

    /// Template for the per-language, per-part-of-speech data files.
    pub data_file_template: String,

    /// Leading character of comment lines in data files.
    pub comment_marker: char,

    /// Read buffer size for file-backed resources.
    pub buffer_size: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        AlignmentConfig {
            bridge_language: "eng".to_string(),
            bridge_publisher: "Princeton".to_string(),
            older_bridge_version: "3.0".to_string(),
            newer_bridge_version: "3.1".to_string(),
            foreign_publisher: "MCR".to_string(),
            foreign_version: "3.0".to_string(),
            version_bridge_resource: "alignment/wn31-wn30.csv".to_string(),
            interlingual_template: "{language}/ili.csv".to_string(),
            data_file_template: "{language}/data.{suffix}".to_string(),
            comment_marker: ' ',
            buffer_size: 65536, // 64KB
        }
    }
}

impl AlignmentConfig {
    /// Load a configuration from a JSON file. Missing keys take default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexalignError::invalid_config(format!(
                "failed to read configuration file '{}': {e}",
                path.display()
            ))
        })?;
        let config: AlignmentConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.older_bridge_version == self.newer_bridge_version {
            return Err(LexalignError::invalid_config(
                "older and newer bridge versions must differ",
            ));
        }
        if self.bridge_language.is_empty() {
            return Err(LexalignError::invalid_config("bridge language is empty"));
        }
        if !self.interlingual_template.contains(LANGUAGE_PLACEHOLDER) {
            return Err(LexalignError::invalid_config(format!(
                "interlingual template must contain {LANGUAGE_PLACEHOLDER}"
            )));
        }
        if !self.data_file_template.contains(LANGUAGE_PLACEHOLDER)
            || !self.data_file_template.contains(SUFFIX_PLACEHOLDER)
        {
            return Err(LexalignError::invalid_config(format!(
                "data file template must contain {LANGUAGE_PLACEHOLDER} and {SUFFIX_PLACEHOLDER}"
            )));
        }
        if self.buffer_size == 0 {
            return Err(LexalignError::invalid_config("buffer size must be positive"));
        }
        Ok(())
    }

    /// The older bridge edition, e.g. Princeton WordNet 3.0.
    pub fn older_bridge(&self) -> EditionDescriptor {
        EditionDescriptor::from_parts(
            self.bridge_publisher.as_str(),
            self.bridge_language.as_str(),
            self.older_bridge_version.as_str(),
        )
    }

    /// The newer bridge edition, e.g. Princeton WordNet 3.1.
    pub fn newer_bridge(&self) -> EditionDescriptor {
        EditionDescriptor::from_parts(
            self.bridge_publisher.as_str(),
            self.bridge_language.as_str(),
            self.newer_bridge_version.as_str(),
        )
    }

    /// The supported non-bridge edition for `language`.
    pub fn foreign_edition(&self, language: &str) -> EditionDescriptor {
        EditionDescriptor::from_parts(
            self.foreign_publisher.as_str(),
            language,
            self.foreign_version.as_str(),
        )
    }

    /// Whether `edition` is one of the two supported bridge editions.
    pub fn is_bridge_edition(&self, edition: &EditionDescriptor) -> bool {
        edition.language() == self.bridge_language
            && edition.publisher() == self.bridge_publisher
            && (edition.number() == self.older_bridge_version
                || edition.number() == self.newer_bridge_version)
    }

    /// Whether `edition` is a supported non-bridge edition.
    pub fn is_foreign_edition(&self, edition: &EditionDescriptor) -> bool {
        edition.language() != self.bridge_language
            && edition.publisher() == self.foreign_publisher
            && edition.number() == self.foreign_version
    }

    /// Name of the inter-lingual index resource for `language`.
    pub fn interlingual_resource(&self, language: &str) -> String {
        self.interlingual_template.replace(LANGUAGE_PLACEHOLDER, language)
    }

    /// Name of the data file resource for `language` and `pos`.
    pub fn data_file_resource(&self, language: &str, pos: PartOfSpeech) -> String {
        self.data_file_template
            .replace(LANGUAGE_PLACEHOLDER, language)
            .replace(SUFFIX_PLACEHOLDER, pos.data_suffix())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_default_support_matrix() {
        let config = AlignmentConfig::default();
        config.validate().unwrap();

        assert_eq!(config.older_bridge().to_string(), "Princeton-eng-3.0");
        assert_eq!(config.newer_bridge().to_string(), "Princeton-eng-3.1");
        assert_eq!(config.foreign_edition("spa").to_string(), "MCR-spa-3.0");

        assert!(config.is_bridge_edition(&config.newer_bridge()));
        assert!(!config.is_bridge_edition(&EditionDescriptor::new("Princeton", "eng", 2.1)));
        assert!(!config.is_bridge_edition(&EditionDescriptor::new("Other", "eng", 3.0)));
        assert!(config.is_foreign_edition(&config.foreign_edition("cat")));
        assert!(!config.is_foreign_edition(&EditionDescriptor::new("MCR", "eng", 3.0)));
    }

    #[test]
    fn test_resource_names() {
        let config = AlignmentConfig::default();

        assert_eq!(config.interlingual_resource("spa"), "spa/ili.csv");
        assert_eq!(
            config.data_file_resource("spa", PartOfSpeech::Adjective),
            "spa/data.adj"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = AlignmentConfig {
            newer_bridge_version: "3.0".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AlignmentConfig {
            data_file_template: "{language}/data".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_uses_defaults_for_missing_keys() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"foreign_publisher": "OMW", "buffer_size": 4096}}"#).unwrap();

        let config = AlignmentConfig::from_file(file.path()).unwrap();
        assert_eq!(config.foreign_publisher, "OMW");
        assert_eq!(config.buffer_size, 4096);
        assert_eq!(config.bridge_language, "eng");
    }
}
