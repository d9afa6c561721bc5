//! Directory-backed resource loader.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::{LexalignError, Result};
use crate::resource::traits::{ResourceLoader, ResourceReader};

/// Resources stored as files below a root directory.
///
/// Resource names are relative paths using `/` as separator.
#[derive(Debug, Clone)]
pub struct DirectoryResourceLoader {
    /// The root directory holding the resources.
    root: PathBuf,
    /// Buffer size for readers.
    buffer_size: usize,
}

impl DirectoryResourceLoader {
    /// Create a loader rooted at `root`.
    pub fn new<P: AsRef<Path>>(root: P, buffer_size: usize) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        if !root.is_dir() {
            return Err(LexalignError::resource(format!(
                "resource root is not a directory: {}",
                root.display()
            )));
        }

        Ok(DirectoryResourceLoader { root, buffer_size })
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the full path for a resource name.
    fn resource_path(&self, name: &str) -> Result<PathBuf> {
        let mut path = self.root.clone();
        for component in name.split('/').filter(|c| !c.is_empty()) {
            if component == ".." {
                return Err(LexalignError::invalid_argument(format!(
                    "resource name escapes the resource root: {name}"
                )));
            }
            path.push(component);
        }
        Ok(path)
    }
}

impl ResourceLoader for DirectoryResourceLoader {
    fn open(&self, name: &str) -> Result<Option<ResourceReader>> {
        let path = self.resource_path(name)?;
        match File::open(&path) {
            Ok(file) => Ok(Some(Box::new(BufReader::with_capacity(
                self.buffer_size,
                file,
            )))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LexalignError::resource(format!(
                "failed to open '{}': {e}",
                path.display()
            ))),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.resource_path(name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Read;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_existing_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("spa")).unwrap();
        fs::write(temp_dir.path().join("spa/ili.csv"), "n#0,n100\n").unwrap();

        let loader = DirectoryResourceLoader::new(temp_dir.path(), 1024).unwrap();

        let mut content = String::new();
        loader
            .open("spa/ili.csv")
            .unwrap()
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "n#0,n100\n");

        assert!(loader.exists("spa/ili.csv"));
        assert!(!loader.exists("cat/ili.csv"));
        assert!(loader.open("cat/ili.csv").unwrap().is_none());
        assert!(loader.open_required("cat/ili.csv").is_err());
    }

    #[test]
    fn test_rejects_escaping_names() {
        let temp_dir = TempDir::new().unwrap();
        let loader = DirectoryResourceLoader::new(temp_dir.path(), 1024).unwrap();

        assert!(loader.open("../etc/passwd").is_err());
        assert!(!loader.exists("../etc/passwd"));
    }

    #[test]
    fn test_root_must_be_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(DirectoryResourceLoader::new(&file, 1024).is_err());
        assert!(DirectoryResourceLoader::new(temp_dir.path().join("missing"), 1024).is_err());
    }
}
