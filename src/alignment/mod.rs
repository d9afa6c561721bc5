//! Alignment tables between dictionary editions.
//!
//! - [`AlignmentTable`]: a direct offset map or the composition of two tables
//! - [`AlignmentPair`]: a table linked with its reverse

pub mod pair;
pub mod table;

pub use pair::AlignmentPair;
pub use table::{AlignmentTable, ComposedTable, DirectTable};
