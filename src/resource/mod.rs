//! Access to bundled resources: mapping files and per-language data files.
//!
//! The loaders only hand out line readers; locating and packaging the files is
//! up to the implementation.

pub mod file;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use file::*;
pub use memory::*;
pub use traits::*;
