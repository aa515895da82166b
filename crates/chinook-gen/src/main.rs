//! chinook-gen CLI
//!
//! Command-line tool for generating Chinook database scripts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use chinook_ddl::prelude::*;
use chinook_gen::{load_dataset, load_schema, GenerateConfig, Generator, SettingsOverrides};

/// Generates the Chinook sample database for many SQL engines.
#[derive(Parser)]
#[command(name = "chinook-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render and write scripts.
    Generate {
        /// Dialect(s) to generate.
        #[arg(short, long = "dialect", env = "CHINOOK_DIALECT", value_delimiter = ',')]
        dialects: Vec<Dialect>,

        /// Generate every dialect.
        #[arg(short, long, conflicts_with = "dialects")]
        all: bool,

        /// Output directory.
        #[arg(short, long, env = "CHINOOK_OUTPUT_DIR", default_value = ".")]
        output: PathBuf,

        /// Use engine-generated (auto-increment) primary keys.
        #[arg(long)]
        identity: bool,

        /// Drop tables instead of dropping and re-creating the database.
        #[arg(long)]
        no_recreate: bool,

        /// Schema JSON file (reference schema if not specified).
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Dataset JSON file (sample dataset if not specified).
        #[arg(long)]
        data: Option<PathBuf>,

        /// Strategy settings JSON file, applied over dialect defaults.
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Also write a Create<Name>.cmd file with the command line.
        #[arg(long)]
        command_file: bool,
    },

    /// List supported dialects.
    List,

    /// Print the reference schema as JSON.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Generate {
            dialects,
            all,
            output,
            identity,
            no_recreate,
            schema,
            data,
            settings,
            command_file,
        } => {
            let mut overrides = settings
                .as_deref()
                .map(SettingsOverrides::load)
                .transpose()?
                .unwrap_or_default();
            if identity {
                overrides.is_identity_enabled = Some(true);
            }
            if no_recreate {
                overrides.is_recreate_database_enabled = Some(false);
            }

            let dialects = if all { Dialect::ALL.to_vec() } else { dialects };
            let config = GenerateConfig::new(dialects, output)
                .overrides(overrides)
                .command_file(command_file);

            let schema = load_schema(schema.as_deref())?;
            let dataset = load_dataset(data.as_deref())?;
            let written = Generator::new(&config, &schema, &dataset).run()?;
            info!("Generated {} script(s).", written.len());
        }

        Commands::List => {
            println!("\nSupported dialects:");
            println!("{:-<60}", "");
            for dialect in Dialect::ALL {
                let strategy = dialect.strategy();
                println!(" {:<18} {}", dialect.as_str(), strategy.script_file_name());
            }
            println!();
        }

        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&chinook_schema())?);
        }
    }

    Ok(())
}
