//! File output of the generator.

use std::fs;

use chinook_ddl::prelude::*;
use chinook_gen::{GenError, GenerateConfig, Generator, SettingsOverrides};
use tempfile::TempDir;

#[test]
fn writes_one_script_per_dialect() {
    let dir = TempDir::new().unwrap();
    let config = GenerateConfig::new(Dialect::ALL.to_vec(), dir.path());
    let (schema, dataset) = (chinook_schema(), sample_dataset());

    let written = Generator::new(&config, &schema, &dataset).run().unwrap();
    assert_eq!(written.len(), 8);
    for generated in &written {
        assert!(generated.script.is_file(), "{}", generated.script.display());
        assert!(generated.command.is_none());
    }
    assert!(dir.path().join("Chinook_SqlServerCompact.sqlce").is_file());
    assert!(dir.path().join("Chinook_Oracle.sql").is_file());
}

#[test]
fn sql_server_script_has_bom() {
    let dir = TempDir::new().unwrap();
    let config = GenerateConfig::new(vec![Dialect::SqlServer], dir.path());
    let (schema, dataset) = (chinook_schema(), sample_dataset());

    Generator::new(&config, &schema, &dataset).run().unwrap();
    let bytes = fs::read(dir.path().join("Chinook_SqlServer.sql")).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
}

#[test]
fn identity_override_changes_file_name() {
    let dir = TempDir::new().unwrap();
    let config = GenerateConfig::new(vec![Dialect::PostgreSql], dir.path()).overrides(
        SettingsOverrides {
            is_identity_enabled: Some(true),
            ..SettingsOverrides::default()
        },
    );
    let (schema, dataset) = (chinook_schema(), sample_dataset());

    Generator::new(&config, &schema, &dataset).run().unwrap();
    let script =
        fs::read_to_string(dir.path().join("Chinook_PostgreSql_AutoIncrementPKs.sql")).unwrap();
    assert!(script.contains("genre_id SERIAL NOT NULL"));
}

#[test]
fn command_file_holds_command_line() {
    let dir = TempDir::new().unwrap();
    let config = GenerateConfig::new(vec![Dialect::Sqlite, Dialect::EffiProz], dir.path())
        .command_file(true);
    let (schema, dataset) = (chinook_schema(), sample_dataset());

    let written = Generator::new(&config, &schema, &dataset).run().unwrap();
    let command = fs::read_to_string(dir.path().join("CreateSqlite.cmd")).unwrap();
    assert_eq!(command, "sqlite3 -init Chinook_Sqlite.sql Chinook_Sqlite.sqlite");

    // No command line configured, no file.
    assert!(written[1].command.is_none());
    assert!(!dir.path().join("CreateEffiProz.cmd").exists());
}

#[test]
fn failed_dialect_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = GenerateConfig::new(vec![Dialect::MySql], dir.path());
    let schema = chinook_schema();
    let dataset = Dataset::new().table(
        TableData::new("Invoice", &["InvoiceId", "InvoiceDate"])
            .row(vec![Value::Int(1), Value::Date("someday".into())]),
    );

    let err = Generator::new(&config, &schema, &dataset).run().unwrap_err();
    assert!(matches!(err, GenError::Incomplete { failed: 1, total: 1 }));
    assert!(!dir.path().join("Chinook_MySql.sql").exists());
}

#[test]
fn no_dialect_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = GenerateConfig::new(Vec::new(), dir.path());
    let (schema, dataset) = (chinook_schema(), sample_dataset());
    assert!(matches!(
        Generator::new(&config, &schema, &dataset).run(),
        Err(GenError::NoDialect)
    ));
}

#[test]
fn overrides_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"foreign_key_def": "OnCreateTableBottom"}"#).unwrap();

    let overrides = SettingsOverrides::load(&path).unwrap();
    assert_eq!(overrides.foreign_key_def, Some(KeyDefinition::OnCreateTableBottom));

    fs::write(&path, "{not json").unwrap();
    assert!(matches!(
        SettingsOverrides::load(&path),
        Err(GenError::Parse { .. })
    ));
}
