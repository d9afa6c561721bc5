//! Process-scoped store of resolved alignment tables.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};

use log::debug;
use parking_lot::{Mutex, MutexGuard, RwLock};

use crate::alignment::{AlignmentPair, AlignmentTable};
use crate::edition::EditionPair;
use crate::error::{LexalignError, Result};

static GLOBAL_CACHE: LazyLock<Arc<TableCache>> = LazyLock::new(|| Arc::new(TableCache::new()));

/// Concurrent cache of alignment tables keyed by directed edition pair.
///
/// The cache only grows. Both directions of a pair are inserted under one
/// write lock, so a reader sees either both or neither. Builds are serialized
/// through a separate mutex while reads of present keys stay lock-shared.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: RwLock<HashMap<EditionPair, Arc<AlignmentTable>>>,
    build_lock: Mutex<()>,
    builds: AtomicUsize,
}

impl TableCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache, created empty on first use.
    pub fn global() -> Arc<TableCache> {
        GLOBAL_CACHE.clone()
    }

    /// The table stored under `key`.
    pub fn get(&self, key: &EditionPair) -> Option<Arc<AlignmentTable>> {
        self.tables.read().get(key).cloned()
    }

    /// Whether a table is stored under `key`.
    pub fn contains(&self, key: &EditionPair) -> bool {
        self.tables.read().contains_key(key)
    }

    /// The reverse of the table stored under `key`.
    pub fn reverse_of(&self, key: &EditionPair) -> Option<Arc<AlignmentTable>> {
        self.get(&key.reversed())
    }

    /// Both directions stored for `key`, linked as a pair.
    ///
    /// `Ok(None)` when either direction is missing.
    pub fn pair(&self, key: &EditionPair) -> Result<Option<AlignmentPair>> {
        let tables = self.tables.read();
        let (Some(forward), Some(reverse)) = (tables.get(key), tables.get(&key.reversed())) else {
            return Ok(None);
        };
        AlignmentPair::from_shared(forward.clone(), reverse.clone())
            .map(Some)
    }

    /// Store `pair` under `key` and its reverse under the reversed key.
    ///
    /// Existing entries are kept; returns whether the pair was inserted.
    pub fn insert_pair(&self, key: EditionPair, pair: AlignmentPair) -> Result<bool> {
        if key.is_identity() {
            return Err(LexalignError::invalid_argument(format!(
                "cannot cache an alignment of an edition with itself: {key}"
            )));
        }

        let reverse_key = key.reversed();
        let mut tables = self.tables.write();
        if tables.contains_key(&key) || tables.contains_key(&reverse_key) {
            debug!("Alignment {key} already cached, keeping existing tables");
            return Ok(false);
        }

        debug!("Caching alignment {key} and its reverse");
        tables.insert(reverse_key, pair.reverse().clone());
        tables.insert(key, pair.forward().clone());
        Ok(true)
    }

    /// Number of cached tables, counting each direction.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    /// Cached keys, sorted.
    pub fn keys(&self) -> Vec<EditionPair> {
        let mut keys: Vec<EditionPair> = self.tables.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of table pairs built from resources or by composition.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    /// Serialize table construction.
    pub(crate) fn build_guard(&self) -> MutexGuard<'_, ()> {
        self.build_lock.lock()
    }

    pub(crate) fn record_build(&self) {
        self.builds.fetch_add(1, Ordering::SeqCst);
    }
}
