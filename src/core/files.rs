use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Trait defining the file operations the stripper needs.
/// Keeps the engine independent of the real filesystem in tests.
pub trait TextStore {
    /// Checks if a file exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Reads the whole file as UTF-8 text.
    ///
    /// # Returns
    /// An error naming the path if the file is missing, unreadable or not
    /// valid UTF-8.
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Overwrites the file with `content`, truncating it first.
    ///
    /// # Arguments
    /// * `path`: The file to replace, relative to the store's root.
    /// * `content`: The full new contents.
    ///
    /// # Returns
    /// An error naming the path if the file cannot be opened or written.
    /// A failure mid-write can leave the file truncated.
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

/// `TextStore` backed by the local filesystem, resolving relative paths
/// against `root`.
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Creates a store whose relative paths resolve against `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// A store rooted at the current working directory.
    pub fn current_dir() -> Result<Self> {
        let root = std::env::current_dir().context("Failed to resolve current directory")?;
        Ok(Self { root })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        // `join` keeps absolute paths as they are.
        self.root.join(path)
    }
}

impl TextStore for DiskStore {
    fn file_exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        fs::read_to_string(&full).with_context(|| format!("Failed to read {}", full.display()))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        let full = self.resolve(path);
        fs::write(&full, content).with_context(|| format!("Failed to write {}", full.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_relative_paths_resolve_against_root() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "x\r\ny").unwrap();

        let store = DiskStore::new(dir.path());
        assert!(store.file_exists(Path::new("a.txt")));
        assert!(!store.file_exists(Path::new("b.txt")));
        assert_eq!(store.read_text(Path::new("a.txt")).unwrap(), "x\r\ny");

        store.write_text(Path::new("a.txt"), "z").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "z");
    }

    #[test]
    fn test_write_to_a_directory_fails_with_context() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("main.js")).unwrap();

        let store = DiskStore::new(dir.path());
        let err = store.write_text(Path::new("main.js"), "a\n").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to write"), "{message}");
        assert!(message.contains("main.js"), "{message}");
        assert!(dir.path().join("main.js").is_dir());
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bin.dat"), [0xff, 0xfe, 0x00]).unwrap();

        let store = DiskStore::new(dir.path());
        let err = store.read_text(Path::new("bin.dat")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read"));
    }
}
