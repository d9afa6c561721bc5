//! Symmetric association between an alignment table and its reverse.

use std::sync::Arc;

use crate::alignment::table::{AlignmentTable, ComposedTable};
use crate::error::{LexalignError, Result};
use crate::pos::PartOfSpeech;

/// A table together with its logical inverse.
///
/// The two directions are held side by side instead of pointing at each
/// other, so no reference cycle exists. Inverting a pair swaps the sides;
/// inverting twice gives back the original tables.
#[derive(Debug, Clone)]
pub struct AlignmentPair {
    forward: Arc<AlignmentTable>,
    reverse: Arc<AlignmentTable>,
}

impl AlignmentPair {
    /// Two empty direct tables linked as mutual reverses.
    pub fn direct() -> Self {
        Self::link(AlignmentTable::direct(), AlignmentTable::direct())
    }

    /// Link `forward` and `reverse` as mutual reverses.
    pub fn link(forward: AlignmentTable, reverse: AlignmentTable) -> Self {
        AlignmentPair {
            forward: Arc::new(forward),
            reverse: Arc::new(reverse),
        }
    }

    /// Re-associate two already shared tables, e.g. both directions read back
    /// from a cache.
    pub fn from_shared(
        forward: Arc<AlignmentTable>,
        reverse: Arc<AlignmentTable>,
    ) -> Result<Self> {
        check_distinct(&forward, &reverse)?;
        Ok(AlignmentPair { forward, reverse })
    }

    /// Replace the reverse partner. The previous partner is released.
    pub fn link_reverse(&mut self, reverse: Arc<AlignmentTable>) -> Result<()> {
        check_distinct(&self.forward, &reverse)?;
        self.reverse = reverse;
        Ok(())
    }

    /// The forward table.
    pub fn forward(&self) -> &Arc<AlignmentTable> {
        &self.forward
    }

    /// The reverse table.
    pub fn reverse(&self) -> &Arc<AlignmentTable> {
        &self.reverse
    }

    /// The same association seen from the reverse side.
    pub fn inverted(&self) -> Self {
        AlignmentPair {
            forward: self.reverse.clone(),
            reverse: self.forward.clone(),
        }
    }

    /// Look up through the forward table.
    pub fn lookup(&self, pos: PartOfSpeech, offset: u64) -> Option<u64> {
        self.forward.lookup(pos, offset)
    }

    /// Insert `first -> second` into the forward table and, when `with_reverse`
    /// is set, `second -> first` into the reverse table.
    ///
    /// Only possible while the pair is still private to its builder: once either
    /// table is shared (e.g. published to a cache) the call is rejected.
    pub fn add_mapping(
        &mut self,
        pos: PartOfSpeech,
        first: u64,
        second: u64,
        with_reverse: bool,
    ) -> Result<()> {
        exclusive(&mut self.forward)?.add_mapping(pos, first, second)?;
        if with_reverse {
            exclusive(&mut self.reverse)?.add_mapping(pos, second, first)?;
        }
        Ok(())
    }

    /// Chain `first` and `second` through their shared intermediate edition.
    ///
    /// The forward table applies `first` then `second`; the reverse applies the
    /// two reverses in the opposite order.
    pub fn compose(first: &AlignmentPair, second: &AlignmentPair) -> Result<Self> {
        let forward = ComposedTable::new(first.forward.clone(), second.forward.clone())?;
        let reverse = ComposedTable::new(second.reverse.clone(), first.reverse.clone())?;
        Ok(Self::link(
            AlignmentTable::Composed(forward),
            AlignmentTable::Composed(reverse),
        ))
    }
}

fn check_distinct(forward: &Arc<AlignmentTable>, reverse: &Arc<AlignmentTable>) -> Result<()> {
    if Arc::ptr_eq(forward, reverse) {
        return Err(LexalignError::invalid_argument(
            "an alignment table cannot be its own reverse",
        ));
    }
    Ok(())
}

fn exclusive(table: &mut Arc<AlignmentTable>) -> Result<&mut AlignmentTable> {
    Arc::get_mut(table)
        .ok_or_else(|| LexalignError::unsupported("alignment table is shared and read-only"))
}
