use std::path::PathBuf;

use super::{raw, Validator};
use crate::config::{ConfigError, FileSystem, Property, StdFileSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    File,
    Folder,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::File => "file",
            Kind::Folder => "folder",
        }
    }
}

/// Path that must name an existing regular file or directory.
/// Returns the path resolved against the working directory.
#[derive(Debug, Clone)]
pub struct PathValidator<F = StdFileSystem> {
    kind: Kind,
    fs: F,
}

pub fn file_exists() -> PathValidator {
    file_exists_with(StdFileSystem)
}

pub fn file_exists_with<F: FileSystem>(fs: F) -> PathValidator<F> {
    PathValidator { kind: Kind::File, fs }
}

pub fn folder_exists() -> PathValidator {
    folder_exists_with(StdFileSystem)
}

pub fn folder_exists_with<F: FileSystem>(fs: F) -> PathValidator<F> {
    PathValidator {
        kind: Kind::Folder,
        fs,
    }
}

impl<F: FileSystem> PathValidator<F> {
    fn probe(&self, value: &str) -> std::io::Result<Option<PathBuf>> {
        let path = self.fs.resolve(value)?;
        let found = match self.kind {
            Kind::File => self.fs.is_file(&path)?,
            Kind::Folder => self.fs.is_dir(&path)?,
        };
        Ok(found.then_some(path))
    }
}

impl<F: FileSystem> Validator for PathValidator<F> {
    type Output = PathBuf;

    fn validate(&self, property: &mut Property) -> Result<PathBuf, ConfigError> {
        let value = raw(property);
        let mut message = format!(
            "{} {} ({value}) does not exist.",
            property.name(),
            self.kind.label()
        );

        if !value.is_empty() {
            match self.probe(value) {
                Ok(Some(path)) => return Ok(path),
                Ok(None) => {}
                Err(err) => message.push_str(&format!(" Exception: {err}")),
            }
        }
        Err(ConfigError::invalid(message))
    }
}
