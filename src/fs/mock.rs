// src/fs/mock.rs

use super::FileSystem;
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEntry {
    File,
    Dir,
}

/// In-memory filesystem keyed by absolute path.
#[derive(Debug, Clone)]
pub struct MockFileSystem {
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
    cwd: PathBuf,
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFileSystem {
    /// Empty filesystem whose working directory is `/`.
    pub fn new() -> Self {
        Self::with_current_dir("/")
    }

    pub fn with_current_dir(cwd: impl AsRef<Path>) -> Self {
        let cwd = cwd.as_ref().to_path_buf();
        let fs = Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            cwd: cwd.clone(),
        };
        fs.add_dir(&cwd);
        fs
    }

    /// Add a file. Relative paths are taken relative to the mock's working
    /// directory; parent directories are created implicitly.
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = self.absolute(path.as_ref());
        let mut entries = self.entries.lock().unwrap();
        if let Some(parent) = path.parent() {
            Self::ensure_dirs(&mut entries, parent);
        }
        entries.insert(path, MockEntry::File);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.absolute(path.as_ref());
        let mut entries = self.entries.lock().unwrap();
        Self::ensure_dirs(&mut entries, &path);
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        crate::paths::resolve(&self.cwd, path)
    }

    fn ensure_dirs(entries: &mut HashMap<PathBuf, MockEntry>, dir: &Path) {
        for ancestor in dir.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            entries
                .entry(ancestor.to_path_buf())
                .or_insert(MockEntry::Dir);
        }
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let entries = self.entries.lock().unwrap();
        entries.contains_key(path)
    }

    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.cwd.clone())
    }
}
