//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading NIS
//! contribution tables from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::paysheet::NisTable;

use super::types::NisConfig;

/// Loads and provides access to NIS contribution tables.
///
/// The `ConfigLoader` reads YAML table files from a directory and
/// provides lookup by effective year.
///
/// # Directory Structure
///
/// The configuration directory holds one file per effective year:
/// ```text
/// config/nis/
/// ├── 2025.yaml
/// └── 2026.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nis").unwrap();
/// let table = loader.table_for_year(2026).unwrap();
/// println!("Brackets: {}", table.brackets().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: BTreeMap<i32, NisTable>,
}

impl ConfigLoader {
    /// Loads all NIS table files from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/nis")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The directory is missing or holds no `.yaml` files
    /// - Any file contains invalid YAML
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timeclock_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/nis")?;
    /// # Ok::<(), timeclock_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut tables = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let config = Self::load_yaml::<NisConfig>(&path)?;
                tables.insert(config.effective_year, NisTable::new(config.brackets));
            }
        }

        if tables.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no table files found)", dir_str),
            });
        }

        Ok(Self { tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Gets the NIS table for the given effective year, if loaded.
    pub fn table_for_year(&self, year: i32) -> Option<&NisTable> {
        self.tables.get(&year)
    }

    /// The most recent loaded NIS table.
    ///
    /// At least one table is guaranteed by [`ConfigLoader::load`].
    pub fn latest_table(&self) -> &NisTable {
        // Non-empty by construction.
        self.tables
            .values()
            .next_back()
            .unwrap_or_else(|| unreachable!("loader holds at least one table"))
    }

    /// The NIS table effective for the given year: the exact year when
    /// loaded, otherwise the most recent one.
    pub fn effective_table(&self, year: i32) -> &NisTable {
        self.table_for_year(year).unwrap_or_else(|| self.latest_table())
    }
}
