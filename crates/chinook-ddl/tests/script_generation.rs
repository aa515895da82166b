//! Whole-script generation across all dialects.

mod common;
use common::*;

use chinook_ddl::prelude::*;

#[test]
fn every_dialect_renders_the_reference_database() {
    let schema = chinook_schema();
    let dataset = sample_dataset();

    for dialect in Dialect::ALL {
        let strategy = dialect.strategy();
        let script = render(strategy.as_ref());

        for table in &schema.tables {
            let create = format!("CREATE TABLE {}\n(", strategy.table_name(&table.name));
            assert!(script.contains(&create), "{dialect}: missing {create}");
        }
        assert_eq!(
            script.matches("INSERT INTO ").count(),
            dataset.row_count(),
            "{dialect}"
        );
    }
}

#[test]
fn generation_is_deterministic() {
    for dialect in Dialect::ALL {
        let strategy = dialect.strategy();
        assert_eq!(render(strategy.as_ref()), render(strategy.as_ref()));
    }
}

#[test]
fn script_file_names() {
    let expected = [
        (Dialect::SqlServer, "Chinook_SqlServer.sql"),
        (Dialect::SqlServerCompact, "Chinook_SqlServerCompact.sqlce"),
        (Dialect::MySql, "Chinook_MySql.sql"),
        (Dialect::PostgreSql, "Chinook_PostgreSql.sql"),
        (Dialect::Oracle, "Chinook_Oracle.sql"),
        (Dialect::Db2, "Chinook_Db2.sql"),
        (Dialect::Sqlite, "Chinook_Sqlite.sql"),
        (Dialect::EffiProz, "Chinook_EffiProz.sql"),
    ];
    for (dialect, file_name) in expected {
        assert_eq!(strategy(dialect, false).script_file_name(), file_name);
    }
    assert_eq!(
        strategy(Dialect::MySql, true).script_file_name(),
        "Chinook_MySql_AutoIncrementPKs.sql"
    );
    // Oracle has no identity token, so the keys stay plain.
    assert_eq!(
        strategy(Dialect::Oracle, true).script_file_name(),
        "Chinook_Oracle.sql"
    );
}

#[test]
fn postgres_sequences_follow_loaded_keys() {
    let script = render(strategy(Dialect::PostgreSql, true).as_ref());

    let last_genre = script
        .find("INSERT INTO genre (genre_id, name) VALUES (25, 'Opera');")
        .unwrap();
    let reset = script
        .find("SELECT setval(pg_get_serial_sequence('genre', 'genre_id'), (SELECT MAX(genre_id) FROM genre));")
        .unwrap();
    assert!(last_genre < reset);
    assert_eq!(script.matches("SELECT setval(").count(), 10);
    assert!(!script.contains("pg_get_serial_sequence('playlist_track'"));

    let plain = render(strategy(Dialect::PostgreSql, false).as_ref());
    assert!(!plain.contains("setval"));
}

#[test]
fn duplicate_row_sets_are_rejected() {
    let genre = |id, name: &str| {
        TableData::new("Genre", &["GenreId", "Name"]).row(vec![Value::Int(id), name.into()])
    };
    let dataset = Dataset::new().table(genre(1, "Rock")).table(genre(2, "Jazz"));

    let strategy = Dialect::SqlServer.strategy();
    let err = ScriptWriter::new(strategy.as_ref())
        .generate(&chinook_schema(), &dataset)
        .unwrap_err();
    assert!(matches!(err, DdlError::InvalidDataset(msg) if msg.contains("'Genre'")));
}

#[test]
fn primary_key_flag_without_key_list_is_rejected() {
    let schema = DatabaseSchema::from_json(
        r#"{
            "name": "Shop",
            "tables": [{
                "name": "Product",
                "columns": [
                    {"name": "ProductId", "logical_type": {"type": "int32"}, "nullable": false, "primary_key": true},
                    {"name": "Label", "logical_type": {"type": "string", "max_length": 50}, "nullable": true, "primary_key": false}
                ]
            }]
        }"#,
    )
    .unwrap();

    let strategy = Dialect::SqlServer.strategy();
    let err = ScriptWriter::new(strategy.as_ref())
        .generate(&schema, &Dataset::new())
        .unwrap_err();
    assert!(matches!(err, DdlError::InvalidSchema(msg) if msg.contains("Product.ProductId")));
}

#[test]
fn mismatched_value_kind_is_rejected() {
    let dataset = Dataset::new().table(
        TableData::new("Genre", &["GenreId", "Name"]).row(vec!["x".into(), "Rock".into()]),
    );
    let strategy = Dialect::MySql.strategy();
    let err = ScriptWriter::new(strategy.as_ref())
        .generate(&chinook_schema(), &dataset)
        .unwrap_err();
    assert!(matches!(
        err,
        DdlError::InvalidDataset(msg) if msg.contains("text value in int32 column 'GenreId'")
    ));
}

#[test]
fn oracle_script_has_no_bare_ampersand() {
    let script = render(Dialect::Oracle.strategy().as_ref());
    assert!(!script.contains('&'));
    assert!(script.contains("'Alternative '||chr(38)||' Punk'"));
    assert!(script.contains("'Guns N'||chr(39)||' Roses'"));
}

#[test]
fn sql_server_wraps_identity_inserts() {
    let strategy = strategy(Dialect::SqlServer, true);
    let script = render(strategy.as_ref());

    let on = script.find("SET IDENTITY_INSERT [dbo].[Genre] ON;").unwrap();
    let insert = script
        .find("INSERT INTO [dbo].[Genre] ([GenreId], [Name]) VALUES (1, N'Rock');")
        .unwrap();
    let off = script.find("SET IDENTITY_INSERT [dbo].[Genre] OFF;").unwrap();
    assert!(on < insert && insert < off);
    assert!(!script.contains("SET IDENTITY_INSERT [dbo].[PlaylistTrack]"));
}

#[test]
fn foreign_keys_on_columns() {
    let schema = chinook_schema();
    let mut strategy = Dialect::MySql.strategy();
    strategy.settings_mut().foreign_key_def = KeyDefinition::OnCreateTableColumn;

    let album = table(&schema, "Album");
    assert_eq!(
        strategy.write_create_column(album, &album.columns[2]),
        "`ArtistId` INT NOT NULL REFERENCES `Artist` (`ArtistId`) ON DELETE NO ACTION ON UPDATE NO ACTION"
    );

    let script = render(strategy.as_ref());
    assert!(!script.contains("ADD CONSTRAINT `FK_"));
    assert!(script.contains("CREATE INDEX `IFK_AlbumArtistId` ON `Album` (`ArtistId`);"));
}

#[test]
fn primary_keys_on_columns() {
    let schema = chinook_schema();
    let mut strategy = Dialect::SqlServer.strategy();
    strategy.settings_mut().primary_key_def = KeyDefinition::OnCreateTableColumn;

    let genre = table(&schema, "Genre");
    assert_eq!(
        column_list(strategy.as_ref(), genre),
        "[GenreId] INT NOT NULL PRIMARY KEY CLUSTERED, [Name] NVARCHAR(120)"
    );

    // Composite keys cannot be declared on a column.
    let playlist_track = strategy.write_create_table(table(&schema, "PlaylistTrack"));
    assert!(playlist_track.contains(
        "CONSTRAINT [PK_PlaylistTrack] PRIMARY KEY NONCLUSTERED ([PlaylistId], [TrackId])"
    ));
}

#[test]
fn recreate_disabled_drops_tables_instead() {
    let mut strategy = Dialect::MySql.strategy();
    strategy.settings_mut().is_recreate_database_enabled = false;
    let script = render(strategy.as_ref());

    assert!(!script.contains("DROP DATABASE"));
    assert!(script.contains("USE `Chinook`;"));
    let drop_line = script.find("DROP TABLE IF EXISTS `PlaylistTrack`;").unwrap();
    let create_genre = script.find("CREATE TABLE `Genre`").unwrap();
    assert!(drop_line < create_genre);
}

#[test]
fn custom_schema_from_json() {
    let schema = DatabaseSchema::from_json(
        r#"{
            "name": "Shop",
            "tables": [{
                "name": "Product",
                "columns": [
                    {"name": "ProductId", "logical_type": {"type": "int32"}, "nullable": false, "primary_key": true},
                    {"name": "Label", "logical_type": {"type": "string", "max_length": 50}, "nullable": false, "primary_key": false},
                    {"name": "Price", "logical_type": {"type": "decimal"}, "nullable": true, "primary_key": false}
                ],
                "primary_key": ["ProductId"]
            }]
        }"#,
    )
    .unwrap();
    let dataset = Dataset::from_json(
        r#"{
            "tables": [{
                "table": "Product",
                "columns": ["ProductId", "Label", "Price"],
                "rows": [[{"type": "int", "value": 1}, {"type": "text", "value": "Kazoo"}, {"type": "decimal", "value": "2.50"}]]
            }]
        }"#,
    )
    .unwrap();

    let strategy = Dialect::PostgreSql.strategy();
    let script = ScriptWriter::new(strategy.as_ref())
        .generate(&schema, &dataset)
        .unwrap();
    assert!(script.contains("CREATE DATABASE shop;"));
    assert!(script.contains("label VARCHAR(50) NOT NULL,"));
    assert!(script.contains("INSERT INTO product (product_id, label, price) VALUES (1, 'Kazoo', 2.50);"));
}

#[test]
fn invalid_decimal_aborts_generation() {
    let dataset = Dataset::new().table(
        TableData::new("InvoiceLine", &["InvoiceLineId", "UnitPrice"])
            .row(vec![Value::Int(1), Value::Decimal("0,99".into())]),
    );
    let strategy = Dialect::Sqlite.strategy();
    let err = ScriptWriter::new(strategy.as_ref())
        .generate(&chinook_schema(), &dataset)
        .unwrap_err();
    assert!(matches!(err, DdlError::InvalidNumber(v) if v == "0,99"));
}
