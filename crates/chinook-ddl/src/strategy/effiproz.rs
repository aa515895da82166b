//! EffiProz dialect.

use crate::settings::{DialectTraits, IdentityPlacement, StrategySettings};

use super::DdlStrategy;

const TRAITS: DialectTraits = DialectTraits {
    identity: "IDENTITY",
    identity_placement: IdentityPlacement::BeforeNullability,
    ..DialectTraits::new("EffiProz")
};

/// EffiProz strategy: double-quoted names, `IDENTITY` before `NOT NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffiProzStrategy {
    settings: StrategySettings,
}

impl EffiProzStrategy {
    /// Creates the strategy with its default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the strategy with explicit settings.
    #[must_use]
    pub const fn with_settings(settings: StrategySettings) -> Self {
        Self { settings }
    }
}

impl DdlStrategy for EffiProzStrategy {
    fn traits(&self) -> &DialectTraits {
        &TRAITS
    }

    fn settings(&self) -> &StrategySettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut StrategySettings {
        &mut self.settings
    }

    fn format_name(&self, name: &str) -> String {
        format!("\"{name}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::chinook_schema;

    #[test]
    fn test_effiproz_identity_before_not_null() {
        let schema = chinook_schema();
        let track = schema.get_table("Track").unwrap();
        let strategy = EffiProzStrategy::with_settings(StrategySettings::default().identity(true));
        assert_eq!(
            strategy.write_create_column(track, &track.columns[0]),
            "\"TrackId\" INT IDENTITY NOT NULL"
        );
        assert_eq!(
            strategy.write_create_column(track, &track.columns[1]),
            "\"Name\" NVARCHAR(200) NOT NULL"
        );
    }

    #[test]
    fn test_effiproz_does_not_recreate() {
        let strategy = EffiProzStrategy::new();
        assert!(!strategy.settings().is_recreate_database_enabled);
        assert_eq!(strategy.write_drop_database("Chinook"), "");
        assert_eq!(strategy.table_name("Track"), "\"Track\"");
        assert_eq!(strategy.script_file_name(), "Chinook_EffiProz.sql");
    }
}
