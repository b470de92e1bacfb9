use amazons::{EngineConfig, Session};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Game of the Amazons engine speaking the line protocol on stdin/stdout
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Engine name answered to `name?`
    #[arg(long)]
    name: Option<String>,

    /// Directory for game logs
    #[arg(long)]
    record_dir: Option<PathBuf>,

    /// Cap on search depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries protocol replies, so logs go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = EngineConfig::load_or_default(cli.config.as_deref());
    if let Some(name) = cli.name {
        config.name = name;
    }
    if let Some(dir) = cli.record_dir {
        config.record_dir = dir;
    }
    if cli.max_depth.is_some() {
        config.max_depth = cli.max_depth;
    }

    info!("[PROTOCOL] {} ready", config.name);
    let mut session = Session::new(config, io::stdout());
    session.run(io::stdin().lock())?;
    Ok(())
}
