//! Persisted UI language: one `locale` key in a small TOML state file.
//!
//! Failures here are never fatal; callers log and carry on with the
//! in-memory choice.

use std::fs;
use std::path::PathBuf;

use crate::config::loader::ConfigError;

const LOCALE_KEY: &str = "locale";

#[derive(Debug, Clone)]
pub struct LocaleStore {
    path: PathBuf,
}

impl LocaleStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.local/share/countries-explorer/state.toml` or the platform equivalent.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("countries-explorer").join("state.toml")
    }

    /// Stored tag, if the file exists and holds a string `locale` key.
    pub fn read(&self) -> Result<Option<String>, ConfigError> {
        let Some(table) = self.read_table()? else {
            return Ok(None);
        };
        Ok(table
            .get(LOCALE_KEY)
            .and_then(toml::Value::as_str)
            .map(str::to_string))
    }

    /// Writes the tag, preserving any other keys already in the file.
    pub fn write(&self, tag: &str) -> Result<(), ConfigError> {
        let mut table = self.read_table()?.unwrap_or_default();
        table.insert(LOCALE_KEY.to_string(), toml::Value::String(tag.to_string()));

        let content = toml::to_string(&table).map_err(|e| ConfigError::WriteError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }

        fs::write(&self.path, content).map_err(|e| ConfigError::WriteError {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        let table: toml::Table =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(Some(table))
    }
}
