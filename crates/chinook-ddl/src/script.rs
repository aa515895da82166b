//! Full script generation.
//!
//! [`ScriptWriter`] walks the schema and dataset once and asks the strategy
//! for every fragment. Nothing is written anywhere: the script is returned
//! as a string, so a rendering error never leaves a partial file behind.

use tracing::{debug, info, warn};

use crate::data::Dataset;
use crate::error::Result;
use crate::schema::DatabaseSchema;
use crate::settings::KeyDefinition;
use crate::strategy::DdlStrategy;

/// Release of the Chinook dataset the generated scripts carry.
pub const CHINOOK_VERSION: &str = "1.4.5";

const RULE: &str =
    "********************************************************************************";

/// Renders complete database scripts for one strategy.
#[derive(Debug, Clone, Copy)]
pub struct ScriptWriter<'a> {
    strategy: &'a dyn DdlStrategy,
}

impl<'a> ScriptWriter<'a> {
    /// Creates a writer for `strategy`.
    #[must_use]
    pub fn new(strategy: &'a dyn DdlStrategy) -> Self {
        Self { strategy }
    }

    /// File name the script should be saved under.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.strategy.script_file_name()
    }

    /// Encodes a rendered script with the strategy's encoding.
    #[must_use]
    pub fn encode(&self, script: &str) -> Vec<u8> {
        self.strategy.settings().encoding.encode(script)
    }

    /// Renders the script creating and populating `schema` with `dataset`.
    ///
    /// Both inputs are validated first; any error aborts the whole script.
    ///
    /// # Errors
    ///
    /// Fails on invalid inputs or on a literal the strategy cannot render.
    pub fn generate(&self, schema: &DatabaseSchema, dataset: &Dataset) -> Result<String> {
        schema.validate()?;
        dataset.validate(schema)?;

        let s = self.strategy;
        let settings = s.settings();
        if settings.is_identity_enabled && s.identity().is_empty() {
            warn!(
                dialect = s.name(),
                "Identity columns requested but the dialect has none; keys stay plain"
            );
        }

        let mut script = Script::new(s.write_execute_command());
        script.header(&self.file_name(), s.name());

        debug!(dialect = s.name(), "Writing database statements");
        script.section("Drop database if it exists");
        script.statement(&s.write_drop_database(&schema.name));
        script.batch();

        script.section("Create database");
        script.statement(&s.write_create_database(&schema.name));
        script.batch();
        script.statement(&s.write_use_database(&schema.name));
        script.batch();

        if !settings.is_recreate_database_enabled {
            script.section("Drop tables");
            for table in schema.tables.iter().rev() {
                script.statement(&s.write_drop_table(&table.name));
            }
            script.batch();
        }

        debug!(dialect = s.name(), tables = schema.tables.len(), "Writing tables");
        script.section("Create Tables");
        for table in &schema.tables {
            script.statement(&s.write_create_table(table));
            script.batch();
        }

        script.section("Create Primary Keys");
        for table in &schema.tables {
            if s.primary_key_placement(table) == Some(KeyDefinition::OnAlterTable) {
                script.statement(&s.write_add_primary_key(table));
            }
        }
        script.batch();

        script.section("Create Foreign Keys");
        for table in &schema.tables {
            for fk in &table.foreign_keys {
                if s.foreign_key_placement(fk) == KeyDefinition::OnAlterTable {
                    script.statement(&s.write_add_foreign_key(table, fk));
                }
                if s.is_index_enabled() {
                    script.statement(&s.write_create_foreign_key_index(table, fk));
                }
            }
        }
        script.batch();

        debug!(dialect = s.name(), rows = dataset.row_count(), "Writing rows");
        script.section("Populate Tables");
        for table in &schema.tables {
            let Some(data) = dataset.get(&table.name).filter(|d| !d.rows.is_empty()) else {
                continue;
            };

            script.statement(&s.write_identity_insert(table, true));
            for row in &data.rows {
                script.statement(&s.write_insert(&table.name, &data.columns, row)?);
            }
            script.statement(&s.write_identity_insert(table, false));
            script.statement(&s.write_identity_reset(table));
            script.batch();
        }

        script.end_section();
        script.statement(s.write_finish_commit());

        info!(
            dialect = s.name(),
            file = %self.file_name(),
            bytes = script.text.len(),
            "Generated script"
        );
        Ok(script.finish())
    }
}

/// Accumulates script text, dropping empty sections.
struct Script {
    text: String,
    pending_section: Option<String>,
    execute_command: &'static str,
    dirty: bool,
}

impl Script {
    fn new(execute_command: &'static str) -> Self {
        Self {
            text: String::new(),
            pending_section: None,
            execute_command,
            dirty: false,
        }
    }

    fn header(&mut self, file_name: &str, dialect: &str) {
        self.text.push_str(&format!(
            "/{RULE}\n\
             \x20  Chinook Database - Version {CHINOOK_VERSION}\n\
             \x20  Script: {file_name}\n\
             \x20  Description: Creates and populates the Chinook database.\n\
             \x20  DB Server: {dialect}\n\
             \x20  Author: Luis Rocha\n\
             \x20  License: https://github.com/lerocha/chinook-database/blob/master/LICENSE.md\n\
             {RULE}/\n"
        ));
    }

    /// Starts a section; its banner is written only if a statement follows.
    fn section(&mut self, title: &str) {
        self.pending_section = Some(format!("\n\n/{RULE}\n   {title}\n{RULE}/\n"));
    }

    fn end_section(&mut self) {
        self.pending_section = None;
    }

    fn statement(&mut self, sql: &str) {
        if sql.is_empty() {
            return;
        }
        if let Some(banner) = self.pending_section.take() {
            self.text.push_str(&banner);
        }
        self.text.push_str(sql);
        self.text.push('\n');
        self.dirty = true;
    }

    /// Ends a batch with the dialect's separator, if there is anything to run.
    fn batch(&mut self) {
        if self.dirty && !self.execute_command.is_empty() {
            self.text.push_str(self.execute_command);
            self.text.push('\n');
        }
        self.dirty = false;
    }

    fn finish(mut self) -> String {
        self.text.push('\n');
        self.text
    }
}
