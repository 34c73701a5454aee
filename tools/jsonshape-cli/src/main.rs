use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use jsonshape::{DeclarationEmitter, DirectorySource, SchemaSource, SchemaValidator};

#[derive(Parser)]
#[command(
    name = "jsonshape",
    version,
    about = "Generate interface declarations and validate data against jsonshape schemas"
)]
struct Cli {
    /// Directory holding one <collection>.json schema file per collection
    #[arg(short, long, env = "JSONSHAPE_SCHEMA_DIR")]
    schema_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one declaration file per schema in the schema directory
    Generate {
        /// Output directory; defaults to the schema directory itself
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Validate a data file against a collection's schema
    Validate {
        /// Collection name (matches <collection>.json in the schema dir)
        collection: String,
        /// Path to the JSON data file
        data: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let source = DirectorySource::new(&cli.schema_dir);

    match cli.command {
        Commands::Generate { out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| cli.schema_dir.clone());
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("creating output directory {}", out_dir.display()))?;

            let emitter = DeclarationEmitter::new();
            let collections = source.collections()?;
            for collection in &collections {
                let schema = source.load(collection)?;
                let declaration = emitter
                    .from_object(&schema, Some(collection))
                    .with_context(|| format!("generating declaration for '{}'", collection))?;

                let target = out_dir.join(format!("{}.d.ts", collection));
                fs::write(&target, declaration)
                    .with_context(|| format!("writing {}", target.display()))?;
                println!("{} -> {}", collection, target.display());
            }
            println!("Generated {} declaration file(s)", collections.len());
        }
        Commands::Validate { collection, data } => {
            let text = fs::read_to_string(&data)
                .with_context(|| format!("reading {}", data.display()))?;
            let value: Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", data.display()))?;

            let validator = SchemaValidator::new(source);
            let defaulted = validator.validate(&collection, &value)?;
            println!("{}", serde_json::to_string_pretty(&defaulted)?);
        }
    }

    Ok(())
}
