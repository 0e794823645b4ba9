use std::collections::BTreeMap;
use std::path::Path;

use super::source::EnvSource;
use super::ConfigError;

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // std may panic on these keys on some platforms
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

/// An isolated, immutable environment snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Captures the current process environment.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    /// Parses a `.env` file into a snapshot without touching the process
    /// environment.
    ///
    /// Values are kept literal: `$VAR` and `${VAR}` are not expanded here,
    /// only by interpolated declarations.
    pub fn from_dotenv(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let wrap = |source| ConfigError::Dotenv {
            path: path.to_path_buf(),
            source,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| wrap(dotenvy::Error::Io(e)))?;
        // dotenvy substitutes every '$' it sees, so hide them behind a char
        // the file does not use and put them back afterwards
        let shield = shield_char(&contents);
        let shielded = contents.replace('$', shield.encode_utf8(&mut [0; 4]));

        let mut env = Self::new();
        for item in dotenvy::from_read_iter(shielded.as_bytes()) {
            let (key, value) = item.map_err(wrap)?;
            env.vars.insert(key, value.replace(shield, "$"));
        }
        Ok(env)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// First private-use char absent from `text`.
fn shield_char(text: &str) -> char {
    ('\u{E000}'..='\u{F8FF}')
        .find(|c| !text.contains(*c))
        .unwrap_or('\u{F8FF}')
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
