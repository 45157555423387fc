use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};
use tokio::time;

use jit_governor::{Governor, GovernorConfig, GovernorError, GovernorResult};

#[derive(Parser, Debug)]
#[command(name = "jit-governor")]
#[command(about = "Off-chain governor publishing JIT defense fee tiers")]
struct Args {
    /// Path to governor configuration file
    #[arg(short, long, default_value = "governor.toml")]
    config: String,

    /// Governor authority keypair file path
    #[arg(short, long)]
    keypair: Option<String>,

    /// RPC URL for Solana cluster
    #[arg(short, long, default_value = "https://api.mainnet-beta.solana.com")]
    rpc_url: String,

    /// Update interval in seconds (overrides the config file)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Dry run mode - solve tiers but don't submit updates
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> GovernorResult<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    log::info!("Starting JIT defense governor");
    log::info!("RPC URL: {}", args.rpc_url);

    if args.dry_run {
        log::warn!("Running in DRY RUN mode - no updates will be submitted");
    }

    // Load configuration
    let config = GovernorConfig::load(&args.config)?;
    let interval_secs = args.interval.unwrap_or(config.default_update_interval);

    log::info!("Governing pool {} via program {}", config.pool, config.program_id);
    log::info!("Update interval: {}s", interval_secs);

    // Load keypair
    let keypair = if let Some(keypair_path) = args.keypair {
        read_keypair_file(&keypair_path).map_err(|e| {
            GovernorError::InvalidConfig(format!(
                "Failed to load keypair from {}: {}",
                keypair_path, e
            ))
        })?
    } else {
        log::warn!("No keypair provided, using random keypair (dry run only)");
        Keypair::new()
    };

    log::info!("Governor authority: {}", keypair.pubkey());

    // Create RPC client
    let rpc_client = Arc::new(RpcClient::new_with_commitment(
        args.rpc_url,
        CommitmentConfig::confirmed(),
    ));

    let governor = Governor::new(rpc_client, Arc::new(keypair), config, args.dry_run);

    // Main update loop
    let mut interval_timer = time::interval(Duration::from_secs(interval_secs));
    let mut iteration = 0u64;

    loop {
        interval_timer.tick().await;
        iteration += 1;

        log::debug!("Starting governor iteration {}", iteration);

        match governor.sync_once().await {
            Ok(true) => log::info!("Iteration {}: tier table updated", iteration),
            Ok(false) => log::debug!("Iteration {}: nothing to publish", iteration),
            Err(e) => {
                log::error!("Error in governor iteration {}: {}", iteration, e);
                // Continue running even if individual iterations fail
            }
        }

        // Basic health metrics every 100 iterations
        if iteration % 100 == 0 {
            log::info!("Governor health check - iteration {}", iteration);
            if let Err(e) = governor.health_check().await {
                log::warn!("Health check warning: {}", e);
            }
        }
    }
}
