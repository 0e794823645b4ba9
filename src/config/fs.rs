//! Filesystem probes used by the path validators.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Existence checks plus resolution against the working directory.
///
/// Injectable so tests can run without touching the real filesystem.
pub trait FileSystem: Send + Sync + std::fmt::Debug {
    fn current_dir(&self) -> io::Result<PathBuf>;

    fn is_file(&self, path: &Path) -> io::Result<bool>;

    fn is_dir(&self, path: &Path) -> io::Result<bool>;

    /// Joins `path` onto the working directory (absolute paths stay as they
    /// are) and normalizes it lexically: `.` segments and trailing
    /// separators vanish, `..` drops the segment before it.
    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let path = Path::new(path);
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir()?.join(path)
        };

        let mut resolved = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                // Popping past the root leaves the root in place
                Component::ParentDir => {
                    resolved.pop();
                }
                other => resolved.push(other),
            }
        }
        Ok(resolved)
    }
}

/// The real filesystem. Symlinks are followed, so a link to a file counts
/// as a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn is_file(&self, path: &Path) -> io::Result<bool> {
        std::fs::metadata(path).map(|m| m.is_file())
    }

    fn is_dir(&self, path: &Path) -> io::Result<bool> {
        std::fs::metadata(path).map(|m| m.is_dir())
    }
}

/// A filesystem where nothing exists, for environments without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsentFileSystem;

impl FileSystem for AbsentFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(PathBuf::from("/"))
    }

    fn is_file(&self, _path: &Path) -> io::Result<bool> {
        Ok(false)
    }

    fn is_dir(&self, _path: &Path) -> io::Result<bool> {
        Ok(false)
    }
}
