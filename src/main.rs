use std::fs::File;
use std::io::{self, BufWriter};
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_disksched::config::{self, ServerConfig};
use u_disksched::models::DiskGeometry;
use u_disksched::server::Server;
use u_disksched::workload::{write_trace_csv, WorkloadGenerator};

#[derive(Parser)]
#[command(name = "disksched-server", about = "Disk scheduling policy API")]
struct Cli {
    #[arg(long, help = "Path to config file (TOML)")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Listen address, overrides the config file")]
    listen: Option<SocketAddr>,

    #[arg(long, help = "Allowed CORS origin, overrides the config file")]
    cors_origin: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,
    /// Write a synthetic disk request trace as CSV.
    Generate {
        #[arg(short = 'n', long, default_value = "1000")]
        count: u32,

        #[arg(long, help = "RNG seed for a reproducible trace")]
        seed: Option<u64>,

        #[arg(long, default_value = "200")]
        disk_size: u32,

        #[arg(short, long, help = "Output file (default: stdout)")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("u_disksched=info,disksched_server=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Generate {
            count,
            seed,
            disk_size,
            output,
        }) => generate(count, seed, disk_size, output),
        Some(Command::Serve) | None => {
            let mut config = match &cli.config {
                Some(path) => config::load_config(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => ServerConfig::default(),
            };
            // CLI flags override config values
            if let Some(listen) = cli.listen {
                config.listen_addr = listen;
            }
            if let Some(origin) = cli.cors_origin {
                config.cors_origin = origin;
            }
            serve(config).await
        }
    }
}

async fn serve(config: ServerConfig) -> Result<()> {
    let server = Server::new(config)?;
    server
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await?;
    Ok(())
}

fn generate(count: u32, seed: Option<u64>, disk_size: u32, output: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(disk_size > 0, "disk size must be at least 1 track");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let records = WorkloadGenerator::new(DiskGeometry::new(disk_size)).trace(count, &mut rng);

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_trace_csv(&records, BufWriter::new(file))?;
            info!("Synthetic disk trace ({} requests) written to {}", count, path.display());
        }
        None => write_trace_csv(&records, io::stdout().lock())?,
    }
    Ok(())
}
