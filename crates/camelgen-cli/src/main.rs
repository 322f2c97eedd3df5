//! camelgen CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use camelgen_core::{assemble, Config, OpenApiContext};
use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "camelgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a Camel RouteBuilder from a Swagger spec and write it to disk
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        /// Root directory of the generated source tree
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the generated Java source to stdout
    Render {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the intermediate route statements as JSON
    Inspect {
        /// Path or URL to the Swagger spec (YAML or JSON)
        #[arg(long)]
        schema_path: String,
    },
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Configuration file (YAML or TOML); flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path or URL to the Swagger spec (YAML or JSON)
    ///
    /// Example: --schema-path petstore.json
    /// Example: --schema-path https://petstore.swagger.io/v2/swagger.json
    #[arg(long)]
    schema_path: Option<String>,
    /// Java package of the generated class
    #[arg(long)]
    package: Option<String>,
}

impl SourceArgs {
    /// Defaults, then the config file, then flags.
    async fn resolve(&self, output_dir: Option<&PathBuf>) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(schema_path) = &self.schema_path {
            config.schema_path = schema_path.clone();
        }
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        if let Some(output_dir) = output_dir {
            config.output_dir = output_dir.to_string_lossy().to_string();
        }
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate { source, output_dir } => {
            let config = source.resolve(output_dir.as_ref()).await?;
            tracing::debug!(?config, "Generating route builder");

            let written = camelgen_core::generate(&config).await.with_context(|| {
                format!("Failed to generate routes from {}", config.schema_path)
            })?;

            println!("Successfully generated route builder: {}", written.display());
        }
        Commands::Render { source } => {
            let config = source.resolve(None).await?;
            let java = camelgen_core::render(&config).await.with_context(|| {
                format!("Failed to render routes from {}", config.schema_path)
            })?;
            print!("{}", java);
        }
        Commands::Inspect { schema_path } => {
            let context = OpenApiContext::from_file_or_url(schema_path)
                .await
                .with_context(|| format!("Failed to load Swagger spec from {}", schema_path))?;
            let spec = context
                .specification()
                .context("Failed to read Swagger spec")?;
            let artifact = assemble(&spec);
            println!("{}", serde_json::to_string_pretty(&artifact)?);
        }
    }
    Ok(())
}
