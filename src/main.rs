use clap::Parser;
use path_manager::bus::stdio;
use path_manager::logging::init_logging;
use path_manager::{Follower, FollowerKind, PathManager, PathManagerConfig};
use std::path::PathBuf;
use tokio::select;
use tokio::sync::mpsc;

const PATH_QUEUE_DEPTH: usize = 10;
const ACK_QUEUE_DEPTH: usize = 10;

#[derive(Parser)]
#[command(name = "path_manager")]
#[command(about = "Waypoint queue and current path publisher", long_about = None)]
struct Cli {
    /// JSON config file; defaults apply when it does not exist
    #[arg(long, default_value = "path_manager.json")]
    config: PathBuf,

    /// Minimum turn radius, overrides the config file
    #[arg(long)]
    r_min: Option<f64>,

    /// Publication rate in Hz, overrides the config file
    #[arg(long)]
    update_rate: Option<f64>,

    /// Path geometry: line or loiter
    #[arg(long)]
    follower: Option<FollowerKind>,
}

impl Cli {
    fn load_config(&self) -> Result<PathManagerConfig, anyhow::Error> {
        let mut config = PathManagerConfig::load_from(&self.config)?;
        if let Some(r_min) = self.r_min {
            config.r_min = r_min;
        }
        if let Some(update_rate) = self.update_rate {
            config.update_rate = update_rate;
        }
        if let Some(follower) = self.follower {
            config.follower = follower;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = cli.load_config()?;
    tracing::info!(
        r_min = config.r_min,
        update_rate = config.update_rate,
        follower = ?config.follower,
        "configuration loaded"
    );

    let (path_tx, path_rx) = mpsc::channel(PATH_QUEUE_DEPTH);
    let (ack_tx, ack_rx) = mpsc::channel(ACK_QUEUE_DEPTH);

    let (handle, manager) =
        PathManager::new(&config, Follower::from_kind(config.follower)).spawn(path_tx);

    tokio::spawn(async move {
        if let Err(e) = stdio::run_inbound(tokio::io::stdin(), handle, ack_tx).await {
            tracing::error!(error = %e, "inbound stream failed");
        }
    });
    let outbound = tokio::spawn(stdio::run_outbound(tokio::io::stdout(), path_rx, ack_rx));

    select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted, shutting down");
        },
        res = manager => res?,
        res = outbound => res??,
    }
    Ok(())
}
