//! Cross-bookmaker football surebet scanner entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use surebet_scanner::config::{Config, TargetDay};
use surebet_scanner::metrics;
use surebet_scanner::notify::{LogNotifier, Notifier, WebhookNotifier};
use surebet_scanner::scanner::Scanner;

/// Cross-bookmaker football surebet scanner.
#[derive(Parser, Debug)]
#[command(name = "surebet-scanner")]
#[command(about = "Detects arbitrage opportunities across bookmaker football odds feeds")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Match-day window to scan (today or tomorrow).
    #[arg(long)]
    day: Option<TargetDay>,

    /// Number of scan cycles to run.
    #[arg(long)]
    cycles: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the scheduled batch scan loop (default).
    Run {
        /// Match-day window to scan (today or tomorrow).
        #[arg(long)]
        day: Option<TargetDay>,

        /// Number of scan cycles to run.
        #[arg(long)]
        cycles: Option<u32>,
    },

    /// Run a single scan cycle and print a summary.
    Scan {
        /// Match-day window to scan (today or tomorrow).
        #[arg(long)]
        day: Option<TargetDay>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("surebet_scanner=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config().await,
        Some(Command::Scan { day }) => cmd_scan(day).await,
        Some(Command::Run { day, cycles }) => cmd_run(day, cycles).await,
        None => cmd_run(args.day, args.cycles).await,
    }
}

/// Load and validate configuration, with optional CLI overrides.
fn load_config(day: Option<TargetDay>, cycles: Option<u32>) -> anyhow::Result<Config> {
    let mut config = Config::load()?;
    if let Some(day) = day {
        config.target_day = day;
    }
    if let Some(cycles) = cycles {
        config.cycles = cycles;
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(config)
}

/// Pick the configured notifier implementation.
fn build_notifier(config: &Config) -> Arc<dyn Notifier> {
    match &config.webhook_url {
        Some(url) => Arc::new(WebhookNotifier::new(url.clone())),
        None => Arc::new(LogNotifier),
    }
}

/// Run the scheduled batch loop.
async fn cmd_run(day: Option<TargetDay>, cycles: Option<u32>) -> anyhow::Result<()> {
    let config = load_config(day, cycles)?;

    if config.feeds.is_empty() {
        warn!("no feeds configured; every cycle will scan zero fixtures");
    }

    // Expose Prometheus metrics for the duration of the run.
    let metrics_addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    if let Err(e) = PrometheusBuilder::new()
        .with_http_listener(metrics_addr)
        .install()
    {
        warn!(error = %e, "metrics exporter unavailable, continuing without it");
    }

    let notifier = build_notifier(&config);
    let scanner = Scanner::from_config(&config, notifier)?;
    let delay = Duration::from_secs(config.cycle_delay_seconds);

    info!(
        day = %config.target_day,
        cycles = config.cycles,
        threshold = config.similarity_threshold,
        feeds = config.feeds.len(),
        "starting surebet scanner"
    );

    tokio::select! {
        () = scanner.run(config.cycles, delay) => {
            info!("scan loop complete");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("received ctrl-c, shutting down");
        }
    }

    Ok(())
}

/// Run one scan cycle and print its summary.
async fn cmd_scan(day: Option<TargetDay>) -> anyhow::Result<()> {
    let config = load_config(day, Some(1))?;
    let notifier = build_notifier(&config);
    let scanner = Scanner::from_config(&config, notifier)?;

    let report = scanner.run_cycle().await;

    println!("Scan cycle complete ({})", config.target_day);
    for (bookmaker, count) in &report.fixtures {
        println!("  {bookmaker}: {count} fixtures");
    }
    println!("  single-bookmaker opportunities: {}", report.single_book_opportunities);
    println!("  cross-bookmaker opportunities:  {}", report.cross_book_opportunities);

    Ok(())
}

/// Check configuration validity.
async fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SUREBET SCANNER - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    // Show configuration summary
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Target Day: {}", config.target_day);
    println!("  Similarity Threshold: {} (strictly greater accepted)", config.similarity_threshold);
    println!("  Cycles: {}", config.cycles);
    println!("  Cycle Delay: {}s", config.cycle_delay_seconds);
    match config.feed_specs() {
        Ok(specs) if specs.is_empty() => println!("  Feeds: none configured"),
        Ok(specs) => {
            for (bookmaker, path) in specs {
                println!("  Feed: {} <- {}", bookmaker, path.display());
            }
        }
        Err(e) => println!("  Feeds: INVALID ({e})"),
    }
    println!(
        "  Notifier: {}",
        if config.webhook_url.is_some() { "webhook" } else { "log-only" }
    );
    println!("  Metrics Port: {}", config.port);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
