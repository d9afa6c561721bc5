//! In-memory resource loader for testing and embedding.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::error::Result;
use crate::resource::traits::{ResourceLoader, ResourceReader};

/// Resources held in memory, keyed by name.
///
/// Every successful `open` is counted per resource, which lets tests assert
/// how often a resource was actually read.
#[derive(Debug, Default)]
pub struct MemoryResourceLoader {
    resources: RwLock<HashMap<String, Arc<str>>>,
    opens: RwLock<HashMap<String, Arc<AtomicUsize>>>,
}

impl MemoryResourceLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource.
    pub fn insert<N: Into<String>, C: Into<String>>(&self, name: N, content: C) {
        let content: String = content.into();
        self.resources.write().insert(name.into(), Arc::from(content));
    }

    /// Builder-style variant of [`MemoryResourceLoader::insert`].
    pub fn with_resource<N: Into<String>, C: Into<String>>(self, name: N, content: C) -> Self {
        self.insert(name, content);
        self
    }

    /// Number of stored resources.
    pub fn resource_count(&self) -> usize {
        self.resources.read().len()
    }

    /// How many times `name` was opened successfully.
    pub fn open_count(&self, name: &str) -> usize {
        self.opens
            .read()
            .get(name)
            .map(|count| count.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    fn record_open(&self, name: &str) {
        if let Some(count) = self.opens.read().get(name) {
            count.fetch_add(1, Ordering::SeqCst);
            return;
        }
        self.opens
            .write()
            .entry(name.to_string())
            .or_default()
            .fetch_add(1, Ordering::SeqCst);
    }
}

impl ResourceLoader for MemoryResourceLoader {
    fn open(&self, name: &str) -> Result<Option<ResourceReader>> {
        let content = match self.resources.read().get(name) {
            Some(content) => content.clone(),
            None => return Ok(None),
        };
        self.record_open(name);
        Ok(Some(Box::new(Cursor::new(ArcText(content)))))
    }

    fn exists(&self, name: &str) -> bool {
        self.resources.read().contains_key(name)
    }
}

/// Shares resource text with readers without copying it.
struct ArcText(Arc<str>);

impl AsRef<[u8]> for ArcText {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn test_open_and_count() {
        let loader = MemoryResourceLoader::new().with_resource("a.csv", "n1,n2\n");

        assert_eq!(loader.resource_count(), 1);
        assert_eq!(loader.open_count("a.csv"), 0);

        let mut content = String::new();
        loader
            .open("a.csv")
            .unwrap()
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "n1,n2\n");
        assert_eq!(loader.open_count("a.csv"), 1);

        loader.open("a.csv").unwrap();
        assert_eq!(loader.open_count("a.csv"), 2);
    }

    #[test]
    fn test_missing_resource() {
        let loader = MemoryResourceLoader::new();

        assert!(loader.open("missing").unwrap().is_none());
        assert!(!loader.exists("missing"));
        assert_eq!(loader.open_count("missing"), 0);
    }
}
