//! Pallet packing CLI

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use palletpack_cli::{write_output, PackingRequest, PackingResponse};
use palletpack_core::solver::PackConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "palletpack")]
#[command(about = "Packs boxes onto as many pallets as it takes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack the boxes described by a JSON request
    Pack {
        /// Path to the request file, or `-` for stdin
        file: PathBuf,

        #[command(flatten)]
        options: PackOptions,
    },

    /// Pack the built-in sample load
    Demo {
        #[command(flatten)]
        options: PackOptions,
    },
}

#[derive(Args)]
struct PackOptions {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Maximum number of pallets to open
    #[arg(long)]
    max_pallets: Option<usize>,

    /// Per-pallet load capacity
    #[arg(long, conflicts_with = "no_capacity")]
    capacity: Option<f64>,

    /// Disable the load capacity check
    #[arg(long)]
    no_capacity: bool,

    /// Skip post-pack verification
    #[arg(long)]
    no_verify: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Box breakdown and pallet report
    Text,
    /// Response as JSON
    Json,
}

impl PackOptions {
    fn config(&self) -> PackConfig {
        let mut config = PackConfig::default().with_verify(!self.no_verify);
        if let Some(max_pallets) = self.max_pallets {
            config = config.with_max_pallets(max_pallets);
        }
        if self.no_capacity {
            config = config.with_capacity(None);
        } else if let Some(capacity) = self.capacity {
            config = config.with_capacity(Some(capacity));
        }
        config
    }
}

fn run(request: &PackingRequest, options: &PackOptions) -> anyhow::Result<()> {
    let response = PackingResponse::run(request, options.config())?;

    let rendered = match options.format {
        Format::Text => format!("{}{}", response.prep_output, response.report_output),
        Format::Json => serde_json::to_string_pretty(&response)?,
    };

    match &options.output {
        Some(path) => write_output(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pack { file, options } => {
            let request = PackingRequest::from_path(&file)
                .with_context(|| format!("failed to load request {}", file.display()))?;
            run(&request, &options)?;
        }

        Commands::Demo { options } => {
            run(&PackingRequest::sample(), &options)?;
        }
    }

    Ok(())
}
