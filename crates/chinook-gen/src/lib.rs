//! Command-line front end for `chinook-ddl`.
//!
//! Resolves dialects and settings, renders each script in memory and writes
//! it to the output directory under its canonical file name. A dialect that
//! fails to render leaves no file behind.

pub mod config;
pub mod error;
pub mod generate;

pub use config::{load_dataset, load_schema, GenerateConfig, SettingsOverrides};
pub use error::{GenError, Result};
pub use generate::{GeneratedScript, Generator};
