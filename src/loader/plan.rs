//! Decides which tables must be built to connect two editions.
//!
//! A plan is computed up front, before any lock is taken, and lists its steps
//! in dependency order. Executing the steps one after another never needs to
//! resolve another edition pair recursively.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::config::AlignmentConfig;
use crate::edition::{EditionDescriptor, EditionPair};

/// One table-building step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum BuildStep {
    /// Load the table between the two bridge versions.
    VersionBridge,
    /// Load the direct table between a language and the older bridge version.
    Interlingual { language: String },
    /// Compose a language's direct table with the version bridge.
    Composed { language: String },
}

impl BuildStep {
    /// The forward key this step populates; its reverse is populated too.
    pub fn key(&self, config: &AlignmentConfig) -> EditionPair {
        match self {
            BuildStep::VersionBridge => {
                EditionPair::new(config.newer_bridge(), config.older_bridge())
            }
            BuildStep::Interlingual { language } => {
                EditionPair::new(config.foreign_edition(language), config.older_bridge())
            }
            BuildStep::Composed { language } => {
                EditionPair::new(config.foreign_edition(language), config.newer_bridge())
            }
        }
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::VersionBridge => write!(f, "version bridge"),
            BuildStep::Interlingual { language } => write!(f, "inter-lingual index ({language})"),
            BuildStep::Composed { language } => write!(f, "composition ({language})"),
        }
    }
}

/// Ordered build steps connecting two editions.
///
/// An empty plan means the combination is not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    steps: Vec<BuildStep>,
}

impl BuildPlan {
    /// Compute the plan for an edition pair. The direction does not matter.
    pub fn for_editions(
        first: &EditionDescriptor,
        second: &EditionDescriptor,
        config: &AlignmentConfig,
    ) -> Self {
        let steps = if first == second {
            Vec::new()
        } else if first.same_language(second) {
            Self::same_language(first, second, config)
        } else {
            Self::cross_language(first, second, config)
        };

        if steps.is_empty() {
            debug!("No supported alignment between {first} and {second}");
        }
        BuildPlan { steps }
    }

    fn same_language(
        first: &EditionDescriptor,
        second: &EditionDescriptor,
        config: &AlignmentConfig,
    ) -> Vec<BuildStep> {
        // Only the bridge language has versions to bridge.
        if config.is_bridge_edition(first) && config.is_bridge_edition(second) {
            vec![BuildStep::VersionBridge]
        } else {
            Vec::new()
        }
    }

    fn cross_language(
        first: &EditionDescriptor,
        second: &EditionDescriptor,
        config: &AlignmentConfig,
    ) -> Vec<BuildStep> {
        let (bridge, foreign) = if first.language() == config.bridge_language {
            (first, second)
        } else if second.language() == config.bridge_language {
            (second, first)
        } else {
            return Vec::new();
        };

        if !config.is_bridge_edition(bridge) || !config.is_foreign_edition(foreign) {
            return Vec::new();
        }

        let language = foreign.language().to_string();
        if bridge.number() == config.older_bridge_version {
            vec![BuildStep::Interlingual { language }]
        } else {
            vec![
                BuildStep::Interlingual {
                    language: language.clone(),
                },
                BuildStep::VersionBridge,
                BuildStep::Composed { language },
            ]
        }
    }

    /// The steps in execution order.
    pub fn steps(&self) -> &[BuildStep] {
        &self.steps
    }

    /// Whether the edition combination is unsupported.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editions() -> (
        AlignmentConfig,
        EditionDescriptor,
        EditionDescriptor,
        EditionDescriptor,
    ) {
        let config = AlignmentConfig::default();
        let wn30 = config.older_bridge();
        let wn31 = config.newer_bridge();
        let spa = config.foreign_edition("spa");
        (config, wn30, wn31, spa)
    }

    #[test]
    fn test_version_bridge_plan() {
        let (config, wn30, wn31, _) = editions();

        let plan = BuildPlan::for_editions(&wn31, &wn30, &config);
        assert_eq!(plan.steps(), &[BuildStep::VersionBridge]);
        assert_eq!(
            BuildPlan::for_editions(&wn30, &wn31, &config),
            plan,
            "plans do not depend on direction"
        );
    }

    #[test]
    fn test_cross_language_plans() {
        let (config, wn30, wn31, spa) = editions();

        let plan = BuildPlan::for_editions(&spa, &wn30, &config);
        assert_eq!(
            plan.steps(),
            &[BuildStep::Interlingual {
                language: "spa".to_string()
            }]
        );

        let plan = BuildPlan::for_editions(&wn31, &spa, &config);
        assert_eq!(plan.steps().len(), 3);
        assert_eq!(plan.steps()[1], BuildStep::VersionBridge);
        assert_eq!(
            plan.steps()[2].key(&config),
            EditionPair::new(spa.clone(), wn31.clone())
        );
    }

    #[test]
    fn test_unsupported_combinations() {
        let (config, wn30, _, spa) = editions();
        let wn21 = EditionDescriptor::new("Princeton", "eng", 2.1);
        let other_english = EditionDescriptor::new("OpenEnglish", "eng", 3.1);
        let spa_old = EditionDescriptor::new("MCR", "spa", 1.6);
        let cat = config.foreign_edition("cat");

        assert!(BuildPlan::for_editions(&wn30, &wn30, &config).is_empty());
        assert!(BuildPlan::for_editions(&wn21, &wn30, &config).is_empty());
        assert!(BuildPlan::for_editions(&other_english, &wn30, &config).is_empty());
        assert!(BuildPlan::for_editions(&spa_old, &spa, &config).is_empty());
        assert!(BuildPlan::for_editions(&spa_old, &wn30, &config).is_empty());
        assert!(BuildPlan::for_editions(&spa, &cat, &config).is_empty());
        assert!(BuildPlan::for_editions(&wn21, &spa, &config).is_empty());
    }

    #[test]
    fn test_step_keys() {
        let (config, wn30, wn31, spa) = editions();

        assert_eq!(
            BuildStep::VersionBridge.key(&config),
            EditionPair::new(wn31.clone(), wn30.clone())
        );
        assert_eq!(
            BuildStep::Interlingual {
                language: "spa".to_string()
            }
            .key(&config),
            EditionPair::new(spa, wn30)
        );
        assert_eq!(BuildStep::VersionBridge.to_string(), "version bridge");
    }
}
