//! Resolution of an edition pair into an alignment table.
//!
//! Resolution first consults the cache without blocking other readers. On a
//! miss it takes the cache's build lock, re-checks, and executes the
//! [`BuildPlan`] for the pair step by step, so concurrent requests for the
//! same pair build it exactly once.

use std::sync::Arc;

use log::{debug, info};

use crate::alignment::{AlignmentPair, AlignmentTable};
use crate::cache::TableCache;
use crate::config::AlignmentConfig;
use crate::edition::{EditionDescriptor, EditionPair};
use crate::error::{LexalignError, Result};
use crate::loader::{BuildPlan, BuildStep, load_interlingual, load_version_bridge};
use crate::pos::PartOfSpeech;
use crate::resource::ResourceLoader;

/// Outcome of resolving an edition pair.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Source and target are the same edition.
    Identity,
    /// Offsets are translated through a cached table.
    Aligned(Arc<AlignmentTable>),
}

impl Resolution {
    /// Translate an offset. Identity returns it unchanged.
    pub fn map_offset(&self, pos: PartOfSpeech, offset: u64) -> Option<u64> {
        match self {
            Resolution::Identity => Some(offset),
            Resolution::Aligned(table) => table.lookup(pos, offset),
        }
    }
}

/// Resolves edition pairs against a cache, building missing tables on demand.
#[derive(Debug, Clone)]
pub struct TableResolver {
    cache: Arc<TableCache>,
    loader: Arc<dyn ResourceLoader>,
    config: Arc<AlignmentConfig>,
}

impl TableResolver {
    /// Create a resolver over `cache`, reading resources through `loader`.
    pub fn new(
        cache: Arc<TableCache>,
        loader: Arc<dyn ResourceLoader>,
        config: AlignmentConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(TableResolver {
            cache,
            loader,
            config: Arc::new(config),
        })
    }

    /// The cache tables are stored in.
    pub fn cache(&self) -> &Arc<TableCache> {
        &self.cache
    }

    /// The resource loader.
    pub fn loader(&self) -> &Arc<dyn ResourceLoader> {
        &self.loader
    }

    /// The active configuration.
    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    /// The build plan connecting two editions.
    pub fn plan(&self, source: &EditionDescriptor, target: &EditionDescriptor) -> BuildPlan {
        BuildPlan::for_editions(source, target, &self.config)
    }

    /// Resolve the table translating `source` offsets into `target` offsets.
    ///
    /// Fails with [`LexalignError::UnavailableMapping`] when no supported path
    /// exists between the editions.
    pub fn resolve(
        &self,
        source: &EditionDescriptor,
        target: &EditionDescriptor,
    ) -> Result<Resolution> {
        if source == target {
            return Ok(Resolution::Identity);
        }

        let key = EditionPair::new(source.clone(), target.clone());
        if let Some(table) = self.cache.get(&key) {
            return Ok(Resolution::Aligned(table));
        }

        let _guard = self.cache.build_guard();

        // Another thread may have finished the build while we waited.
        if let Some(table) = self.cache.get(&key) {
            return Ok(Resolution::Aligned(table));
        }

        let plan = self.plan(source, target);
        for step in plan.steps() {
            if !self.execute(step)? {
                debug!("Step '{step}' produced no table, stopping resolution of {key}");
                break;
            }
        }

        self.cache
            .get(&key)
            .map(Resolution::Aligned)
            .ok_or_else(|| LexalignError::unavailable(source, target))
    }

    /// Run one step unless its table is already cached.
    ///
    /// Returns whether the step's table is present afterwards. Must be called
    /// with the build lock held.
    fn execute(&self, step: &BuildStep) -> Result<bool> {
        let key = step.key(&self.config);
        if self.cache.contains(&key) {
            debug!("Step '{step}' already satisfied by cached {key}");
            return Ok(true);
        }

        let pair = match step {
            BuildStep::VersionBridge => {
                Some(load_version_bridge(self.loader.as_ref(), &self.config)?)
            }
            BuildStep::Interlingual { language } => {
                load_interlingual(self.loader.as_ref(), &self.config, language)?
            }
            BuildStep::Composed { language } => self.compose(language)?,
        };

        match pair {
            Some(pair) => {
                self.cache.insert_pair(key, pair)?;
                self.cache.record_build();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Chain `language => older bridge` with `older bridge => newer bridge`.
    fn compose(&self, language: &str) -> Result<Option<AlignmentPair>> {
        let interlingual = BuildStep::Interlingual {
            language: language.to_string(),
        }
        .key(&self.config);
        let bridge = BuildStep::VersionBridge.key(&self.config);

        let (Some(to_older), Some(newer_to_older)) =
            (self.cache.pair(&interlingual)?, self.cache.pair(&bridge)?)
        else {
            return Ok(None);
        };

        let composed = AlignmentPair::compose(&to_older, &newer_to_older.inverted())?;
        info!(
            "Composed {} => {} through {}",
            self.config.foreign_edition(language),
            self.config.newer_bridge(),
            self.config.older_bridge()
        );
        Ok(Some(composed))
    }
}
