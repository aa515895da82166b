//! Run configuration: dialect selection, settings overrides and inputs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use chinook_ddl::prelude::*;

use crate::error::{GenError, Result};

/// Partial [`StrategySettings`] read from a JSON file.
///
/// Unset fields keep the dialect's own default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsOverrides {
    /// Placement of primary key constraints.
    pub primary_key_def: Option<KeyDefinition>,
    /// Placement of foreign key constraints.
    pub foreign_key_def: Option<KeyDefinition>,
    /// Identity key generation.
    pub is_identity_enabled: Option<bool>,
    /// Database drop and re-create.
    pub is_recreate_database_enabled: Option<bool>,
    /// Command line template.
    pub command_line_format: Option<String>,
    /// Script encoding.
    pub encoding: Option<ScriptEncoding>,
}

impl SettingsOverrides {
    /// Reads overrides from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Writes every set field over `settings`.
    pub fn apply(&self, settings: &mut StrategySettings) {
        if let Some(def) = self.primary_key_def {
            settings.primary_key_def = def;
        }
        if let Some(def) = self.foreign_key_def {
            settings.foreign_key_def = def;
        }
        if let Some(enabled) = self.is_identity_enabled {
            settings.is_identity_enabled = enabled;
        }
        if let Some(enabled) = self.is_recreate_database_enabled {
            settings.is_recreate_database_enabled = enabled;
        }
        if let Some(format) = &self.command_line_format {
            settings.command_line_format.clone_from(format);
        }
        if let Some(encoding) = self.encoding {
            settings.encoding = encoding;
        }
    }
}

/// Everything one `generate` run needs.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Dialects to render, in order.
    pub dialects: Vec<Dialect>,
    /// Directory receiving the scripts.
    pub output_dir: PathBuf,
    /// Settings applied on top of each dialect's defaults.
    pub overrides: SettingsOverrides,
    /// Whether to write a `Create<Name>.cmd` file next to each script.
    pub command_file: bool,
}

impl GenerateConfig {
    /// Creates a configuration for `dialects`, writing into `output_dir`.
    #[must_use]
    pub fn new(dialects: Vec<Dialect>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            dialects,
            output_dir: output_dir.into(),
            overrides: SettingsOverrides::default(),
            command_file: false,
        }
    }

    /// Sets the settings overrides.
    #[must_use]
    pub fn overrides(mut self, overrides: SettingsOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Enables writing command files.
    #[must_use]
    pub fn command_file(mut self, enabled: bool) -> Self {
        self.command_file = enabled;
        self
    }

    /// Builds the strategy for `dialect` with the overrides applied.
    #[must_use]
    pub fn strategy(&self, dialect: Dialect) -> Box<dyn DdlStrategy> {
        let mut strategy = dialect.strategy();
        self.overrides.apply(strategy.settings_mut());
        debug!(dialect = %dialect, settings = ?strategy.settings(), "Resolved settings");
        strategy
    }
}

/// Loads a schema from a JSON file, or the reference schema.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_schema(path: Option<&Path>) -> Result<DatabaseSchema> {
    path.map_or_else(|| Ok(chinook_schema()), read_json)
}

/// Loads a dataset from a JSON file, or the sample dataset.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    path.map_or_else(|| Ok(sample_dataset()), read_json)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| GenError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let mut settings = SqlServerStrategy::new().settings().clone();
        let before = settings.clone();
        SettingsOverrides::default().apply(&mut settings);
        assert_eq!(settings, before);
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides: SettingsOverrides = serde_json::from_str(
            r#"{"primary_key_def": "OnAlterTable", "is_identity_enabled": true, "encoding": "Utf16Le"}"#,
        )
        .unwrap();

        let mut settings = MySqlStrategy::new().settings().clone();
        overrides.apply(&mut settings);
        assert_eq!(settings.primary_key_def, KeyDefinition::OnAlterTable);
        assert_eq!(settings.foreign_key_def, KeyDefinition::OnAlterTable);
        assert!(settings.is_identity_enabled);
        assert!(settings.is_recreate_database_enabled);
        assert_eq!(settings.encoding, ScriptEncoding::Utf16Le);
    }

    #[test]
    fn test_unknown_override_is_rejected() {
        let result: serde_json::Result<SettingsOverrides> =
            serde_json::from_str(r#"{"identity": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_strategy_applies_overrides() {
        let config = GenerateConfig::new(vec![Dialect::Sqlite], "out").overrides(
            SettingsOverrides {
                is_identity_enabled: Some(true),
                ..SettingsOverrides::default()
            },
        );
        let strategy = config.strategy(Dialect::Sqlite);
        assert_eq!(strategy.script_file_name(), "Chinook_Sqlite_AutoIncrementPKs.sql");
    }

    #[test]
    fn test_defaults_without_input_files() {
        assert_eq!(load_schema(None).unwrap().tables.len(), 11);
        assert!(load_dataset(None).unwrap().row_count() > 0);
    }
}
