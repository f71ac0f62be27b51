//! foldfetch: AlphaFold model download and DSSP secondary structure extraction.
//! Entry point for the command line binary.

mod config;
mod ids;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use foldfetch_common::SandboxClient;
use foldfetch_structure::alphafold::AlphaFoldFetcher;
use foldfetch_structure::dssp::DsspRunner;
use foldfetch_structure::pipeline::StructurePipeline;
use foldfetch_structure::uniprot::UniprotClient;

#[derive(Parser, Debug)]
#[command(name = "foldfetch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that a UniProt entry can be fetched
    Probe {
        id: String,
    },
    /// Download AlphaFold models for a list of UniProt accessions
    Download {
        ids: Vec<String>,
        /// File with one accession per line
        #[arg(long)]
        ids_file: Option<PathBuf>,
        /// Destination directory (defaults to workspace.path)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Print the DSSP secondary structure string of a structure file
    Secstruct {
        structure: PathBuf,
        /// DSSP executable (defaults to dssp.executable)
        #[arg(long)]
        dssp: Option<PathBuf>,
    },
    /// Download models and print their secondary structure
    Run {
        ids: Vec<String>,
        #[arg(long)]
        ids_file: Option<PathBuf>,
        #[arg(short, long)]
        dir: Option<PathBuf>,
        #[arg(long)]
        dssp: Option<PathBuf>,
        /// Emit JSON instead of one tab-separated line per model
        #[arg(long)]
        json: bool,
    },
}

fn build_client(config: &config::Config) -> Result<SandboxClient> {
    let mut client = SandboxClient::new()?;
    client
        .allow_url_host(&config.services.uniprot_base_url)
        .context("Invalid services.uniprot_base_url")?;
    client
        .allow_url_host(&config.services.alphafold_base_url)
        .context("Invalid services.alphafold_base_url")?;
    Ok(client)
}

fn build_fetcher(config: &config::Config, client: SandboxClient) -> AlphaFoldFetcher {
    AlphaFoldFetcher::new(client)
        .with_base_url(&config.services.alphafold_base_url)
        .with_model_version(&config.services.model_version)
}

fn build_dssp(config: &config::Config, executable: Option<PathBuf>) -> DsspRunner {
    let executable = executable.unwrap_or_else(|| PathBuf::from(&config.dssp.executable));
    DsspRunner::new(executable).with_scratch_dir(&config.dssp.scratch_dir)
}

fn output_dir(config: &config::Config, dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = dir.unwrap_or_else(|| PathBuf::from(&config.workspace.path));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    Ok(dir)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("foldfetch=info,info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::Config::load().context("Failed to load configuration")?;
    let client = build_client(&config)?;

    match cli.command {
        Commands::Probe { id } => {
            let uniprot = UniprotClient::with_base_url(client, &config.services.uniprot_base_url);
            let report = uniprot.probe(&id, None).await?;
            println!("{}", report);
        }
        Commands::Download { ids, ids_file, dir } => {
            let ids = ids::collect_ids(ids, ids_file.as_deref())?;
            let dir = output_dir(&config, dir)?;
            let summary = build_fetcher(&config, client).download_all(&ids, &dir).await?;
            info!(
                "Downloaded {} of {} models into {}",
                summary.written.len(),
                ids.len(),
                dir.display()
            );
        }
        Commands::Secstruct { structure, dssp } => {
            let ss = build_dssp(&config, dssp)
                .secondary_structure(Path::new(&structure))
                .await?;
            println!("{}", ss);
        }
        Commands::Run { ids, ids_file, dir, dssp, json } => {
            let ids = ids::collect_ids(ids, ids_file.as_deref())?;
            let dir = output_dir(&config, dir)?;
            let pipeline = StructurePipeline::new(
                build_fetcher(&config, client),
                build_dssp(&config, dssp),
                &dir,
            );
            let annotations = pipeline.run(&ids).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&annotations)?);
            } else {
                for a in &annotations {
                    println!("{}\t{}", a.uniprot_id, a.secondary_structure);
                }
            }
        }
    }

    Ok(())
}
