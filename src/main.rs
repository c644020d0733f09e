//! samplify CLI entrypoint
//! Parses command-line arguments and dispatches to the enhancement pipeline.
#![deny(unsafe_code)]

use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use samplify::config::Config;
use samplify::enhancement::{SpecEnhancer, TemplateValues};
use samplify::infrastructure::{CompositeSpecLoader, SpecLoader};

#[derive(Parser)]
#[command(name = "samplify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Enhance an OpenAPI document with per-operation code samples
    Enhance {
        /// Path or URL to the OpenAPI document (YAML or JSON)
        #[arg(long)]
        schema_path: String,
        /// API token substituted into the credential placeholder
        /// (falls back to SAMPLIFY_API_TOKEN)
        #[arg(long)]
        api_token: Option<String>,
        /// Public endpoint URL written into the document's servers list
        /// (falls back to SAMPLIFY_ENDPOINT_URL)
        #[arg(long)]
        endpoint_url: Option<String>,
        /// Write the enhanced document to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Enhance {
            schema_path,
            api_token,
            endpoint_url,
            output,
        } => enhance(&schema_path, api_token, endpoint_url, output).await,
    }
}

/// Runtime handler for the enhance command
async fn enhance(
    schema_path: &str,
    api_token: Option<String>,
    endpoint_url: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config =
        Config::resolve(endpoint_url, api_token).context("Failed to resolve configuration")?;

    info!(schema_path, "Loading OpenAPI document");
    let loader = CompositeSpecLoader::new();
    let document = loader
        .load(schema_path)
        .await
        .context("Failed to load OpenAPI document")?;

    let enhancer = SpecEnhancer::new(config.endpoint_url);
    let enhanced = enhancer
        .enhance(&document, &TemplateValues::new(config.api_token))
        .context("Failed to enhance OpenAPI document")?;

    let rendered = serde_json::to_string_pretty(&enhanced)
        .context("Failed to serialize enhanced document")?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote enhanced OpenAPI document");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
