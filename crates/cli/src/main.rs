use anyhow::Result;
use clap::{Parser, Subcommand};
use interview_ingest_core::env_non_empty;
use interview_ingest_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "interview-ingest")]
#[command(about = "Retell webhook ingestion and interview analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (webhook endpoint and read API)
    Serve {
        #[arg(short, long, env = "INTERVIEW_INGEST_PORT", default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, env = "INTERVIEW_INGEST_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Keep interviews in process memory instead of PostgreSQL
        #[arg(long)]
        in_memory: bool,
    },
    /// Print all interviews as JSON, newest first
    Interviews,
    /// Print one interview by call id
    Interview { call_id: String },
    /// Print the analytics dashboard as JSON
    Dashboard,
}

pub(crate) fn get_database_url() -> Result<String> {
    env_non_empty("DATABASE_URL")
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

pub(crate) async fn connect_postgres() -> Result<StorageBackend> {
    let url = get_database_url()?;
    Ok(StorageBackend::new_postgres(&url).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, in_memory } => {
            commands::serve::run(port, host, in_memory).await?;
        },
        Commands::Interviews => commands::query::run_interviews().await?,
        Commands::Interview { call_id } => commands::query::run_interview(&call_id).await?,
        Commands::Dashboard => commands::query::run_dashboard().await?,
    }

    Ok(())
}
