//! Writes rendered scripts to disk.

use std::fs;
use std::path::PathBuf;

use tracing::{error, info};

use chinook_ddl::prelude::*;

use crate::config::GenerateConfig;
use crate::error::{GenError, Result};

/// Files written for one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    /// Dialect the script targets.
    pub dialect: Dialect,
    /// Path of the script file.
    pub script: PathBuf,
    /// Path of the command file, when one was written.
    pub command: Option<PathBuf>,
}

/// Renders and writes scripts for every configured dialect.
#[derive(Debug)]
pub struct Generator<'a> {
    config: &'a GenerateConfig,
    schema: &'a DatabaseSchema,
    dataset: &'a Dataset,
}

impl<'a> Generator<'a> {
    /// Creates a generator over `schema` and `dataset`.
    #[must_use]
    pub const fn new(
        config: &'a GenerateConfig,
        schema: &'a DatabaseSchema,
        dataset: &'a Dataset,
    ) -> Self {
        Self {
            config,
            schema,
            dataset,
        }
    }

    /// Generates one dialect.
    ///
    /// The script is rendered completely before anything is written.
    ///
    /// # Errors
    ///
    /// Fails on a rendering error or when a file cannot be written.
    pub fn generate(&self, dialect: Dialect) -> Result<GeneratedScript> {
        let strategy = self.config.strategy(dialect);
        let writer = ScriptWriter::new(strategy.as_ref());
        let script = writer.generate(self.schema, self.dataset)?;

        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|e| GenError::io(dir, e))?;

        let file_name = writer.file_name();
        let script_path = dir.join(&file_name);
        fs::write(&script_path, writer.encode(&script))
            .map_err(|e| GenError::io(&script_path, e))?;
        info!(dialect = %dialect, path = %script_path.display(), "Wrote script");

        let command = strategy.command_line(&file_name);
        let command_path = if self.config.command_file && !command.is_empty() {
            let path = dir.join(format!("Create{}.cmd", strategy.name()));
            fs::write(&path, command).map_err(|e| GenError::io(&path, e))?;
            info!(dialect = %dialect, path = %path.display(), "Wrote command file");
            Some(path)
        } else {
            None
        };

        Ok(GeneratedScript {
            dialect,
            script: script_path,
            command: command_path,
        })
    }

    /// Generates every configured dialect.
    ///
    /// A failing dialect is logged and skipped; the others are still
    /// written. Any failure makes the whole run an error.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::NoDialect`] or [`GenError::Incomplete`].
    pub fn run(&self) -> Result<Vec<GeneratedScript>> {
        if self.config.dialects.is_empty() {
            return Err(GenError::NoDialect);
        }

        let mut written = Vec::new();
        let mut failed = 0;
        for &dialect in &self.config.dialects {
            match self.generate(dialect) {
                Ok(generated) => written.push(generated),
                Err(e) => {
                    error!(dialect = %dialect, "{e}");
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(GenError::Incomplete {
                failed,
                total: self.config.dialects.len(),
            });
        }
        Ok(written)
    }
}
