//! Store activity count query generator CLI

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use store_count_query::{
    application::builder::ApplicationBuilder,
    config::LogFormat,
    dto::QueryInput,
    infrastructure::export::{FileQueryExporter, StdoutExporter},
    ports::QueryExporter,
    value_objects::{ReportDate, StoreCodePolicy},
    Config,
};

#[derive(Parser)]
#[command(name = "store-count-query")]
#[command(about = "Generate store activity count queries", long_about = None)]
struct Cli {
    /// Brand catalog file (TOML, YAML or JSON); overrides BRAND_CATALOG_PATH
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level or filter directive; overrides QUERY_LOG_LEVEL
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the count query for a brand, store and start date
    Generate {
        /// Brand display name, e.g. "Rang Ja"
        #[arg(short, long)]
        brand: Option<String>,
        /// Store code, interpolated verbatim
        #[arg(short, long)]
        store_code: Option<String>,
        /// Start date, dd-mm-yyyy or yyyy-mm-dd
        #[arg(short, long, value_parser = parse_date)]
        date: Option<ReportDate>,
        /// Store code check; overrides STORE_CODE_POLICY
        #[arg(long)]
        store_code_policy: Option<StoreCodePolicy>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the brands in the catalog
    Brands {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_date(s: &str) -> Result<ReportDate, String> {
    ReportDate::parse(s).map_err(|e| e.to_string())
}

fn init_tracing(config: &Config) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Commands::Generate {
        store_code_policy: Some(policy),
        ..
    } = &cli.command
    {
        config.store_code_policy = *policy;
    }

    init_tracing(&config);
    config
        .validate()
        .map_err(|e| anyhow!(e))
        .context("Invalid configuration")?;
    debug!(?config, "Configuration loaded and validated");

    let app = ApplicationBuilder::new(config)
        .with_configured_catalog()
        .context("Failed to load brand catalog")?
        .build();

    match cli.command {
        Commands::Generate {
            brand,
            store_code,
            date,
            format,
            output,
            ..
        } => {
            let input = QueryInput {
                brand_name: brand,
                store_code,
                date: date.map(|d| *d.as_naive_date()),
            };
            let generated = app.generate_query.execute(&input)?;

            let rendered = match format {
                OutputFormat::Text => generated.query,
                OutputFormat::Json => serde_json::to_string_pretty(&generated)
                    .context("Failed to serialize query")?,
            };

            match output {
                Some(path) => {
                    FileQueryExporter::new(&path).export(&rendered)?;
                    info!("Query written to {}", path.display());
                }
                None => StdoutExporter.export(&rendered)?,
            }
        }
        Commands::Brands { format } => {
            let brands = app.list_brands.execute();
            let rendered = match format {
                OutputFormat::Text => brands
                    .iter()
                    .map(|b| b.label.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
                OutputFormat::Json => serde_json::to_string_pretty(&brands)
                    .context("Failed to serialize brand list")?,
            };
            StdoutExporter.export(&rendered)?;
        }
    }

    Ok(())
}
