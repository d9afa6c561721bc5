//! Resource loader abstraction.

use std::io::BufRead;

use crate::error::{LexalignError, Result};

/// Line-oriented reader over one bundled resource.
pub type ResourceReader = Box<dyn BufRead + Send>;

/// A source of bundled text resources.
///
/// This provides a pluggable interface for where mapping files and data files
/// live: a directory on disk, memory, or anything else able to hand out a
/// buffered reader.
pub trait ResourceLoader: Send + Sync + std::fmt::Debug {
    /// Open a resource for reading.
    ///
    /// Returns `Ok(None)` when the resource does not exist. Any other failure
    /// to open it is an error.
    fn open(&self, name: &str) -> Result<Option<ResourceReader>>;

    /// Check if a resource exists.
    fn exists(&self, name: &str) -> bool {
        matches!(self.open(name), Ok(Some(_)))
    }

    /// Open a resource that must exist.
    fn open_required(&self, name: &str) -> Result<ResourceReader> {
        self.open(name)?
            .ok_or_else(|| LexalignError::resource(format!("required resource '{name}' not found")))
    }
}

/// Iterator over the lines of a resource as `(line_number, line)`.
///
/// Line numbers start at 1. Read failures are reported as resource errors
/// naming the resource, and end the iteration.
pub struct ResourceLines {
    name: String,
    reader: ResourceReader,
    line_number: usize,
    failed: bool,
}

impl ResourceLines {
    /// Wrap an opened resource.
    pub fn new<S: Into<String>>(name: S, reader: ResourceReader) -> Self {
        ResourceLines {
            name: name.into(),
            reader,
            line_number: 0,
            failed: false,
        }
    }

    /// Name of the resource being read.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Iterator for ResourceLines {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok((self.line_number, line)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(LexalignError::resource(format!(
                    "failed to read '{}' after line {}: {e}",
                    self.name, self.line_number
                ))))
            }
        }
    }
}
