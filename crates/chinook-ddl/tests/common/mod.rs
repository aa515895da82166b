#![allow(dead_code)]

use chinook_ddl::prelude::*;

/// Strategy for `dialect` with identity columns switched on or off.
pub fn strategy(dialect: Dialect, identity: bool) -> Box<dyn DdlStrategy> {
    let mut strategy = dialect.strategy();
    strategy.settings_mut().is_identity_enabled = identity;
    strategy
}

pub fn table<'a>(schema: &'a DatabaseSchema, name: &str) -> &'a TableSchema {
    schema
        .get_table(name)
        .unwrap_or_else(|| panic!("No table {name} in the reference schema"))
}

/// Column definitions of `table` joined the way they appear in a column list.
pub fn column_list(strategy: &dyn DdlStrategy, table: &TableSchema) -> String {
    table
        .columns
        .iter()
        .map(|c| strategy.write_create_column(table, c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the full reference script for `strategy`.
pub fn render(strategy: &dyn DdlStrategy) -> String {
    ScriptWriter::new(strategy)
        .generate(&chinook_schema(), &sample_dataset())
        .unwrap_or_else(|e| panic!("Failed to render {}: {e}", strategy.name()))
}

/// Undoes a dialect's string literal escaping.
pub fn unescape_string(dialect: Dialect, literal: &str) -> String {
    let body = literal.strip_prefix('N').unwrap_or(literal);
    let body = body
        .strip_prefix('\'')
        .and_then(|b| b.strip_suffix('\''))
        .unwrap_or_else(|| panic!("Not a string literal: {literal}"));

    match dialect {
        Dialect::Oracle => body
            .replace("'||chr(39)||'", "'")
            .replace("'||chr(38)||'", "&"),
        Dialect::MySql => body.replace("''", "'").replace("\\\\", "\\"),
        _ => body.replace("''", "'"),
    }
}

/// Strips the dialect's identifier quoting.
pub fn strip_quotes(name: &str) -> &str {
    name.trim_start_matches(['[', '`', '"'])
        .trim_end_matches([']', '`', '"'])
}
