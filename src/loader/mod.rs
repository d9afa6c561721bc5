//! Building alignment tables from bundled resources.
//!
//! - [`version_bridge`]: the table between two bridge-language versions
//! - [`interlingual`]: direct tables between another language and the bridge
//! - [`offset_index`]: per-language offset lists used by the inter-lingual loader
//! - [`plan`]: which of the above a given edition pair needs, in order

pub mod interlingual;
pub mod offset_index;
pub mod plan;
pub mod sense_key;
pub mod version_bridge;

pub use interlingual::load_interlingual;
pub use offset_index::PosOffsetIndex;
pub use plan::{BuildPlan, BuildStep};
pub use version_bridge::load_version_bridge;

/// Row counts gathered while loading a mapping resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows turned into mappings.
    pub loaded: usize,
    /// Rows discarded because their two parts of speech disagree.
    pub skipped: usize,
}
