use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use bucket_limiter::loggers::debug_logger::DebugLogger;
use bucket_limiter::loggers::stats_logger::StatsLogger;
use bucket_limiter::{BucketLimiter, LimiterConfig, LimiterError};
use clap::Parser;
use tokio::time::Instant;

#[derive(Parser)]
#[command(version, about = "Hammer a single token bucket from concurrent workers", long_about = None)]
struct Cli {
    #[clap(short, long, default_value = "100")]
    fill_interval_ms: u64,
    #[clap(short, long, default_value = "10")]
    capacity: usize,
    #[clap(short, long, default_value = "8")]
    workers: usize,
    #[clap(short, long, default_value = "1000")]
    duration_ms: u64,
    #[clap(long, action)]
    debug_logging: bool,
    // Read BUCKET_LIMITER_FILL_INTERVAL_MS / BUCKET_LIMITER_CAPACITY instead of the flags above
    #[clap(long, action)]
    from_env: bool,
}

fn build_limiter(cli: &Cli) -> Result<BucketLimiter, LimiterError> {
    if cli.from_env {
        LimiterConfig::from_env()?.build()
    } else {
        LimiterConfig {
            fill_interval_ms: cli.fill_interval_ms,
            capacity: cli.capacity,
        }
        .build()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let stats = Arc::new(StatsLogger::new());
    let mut limiter = match build_limiter(&cli) {
        Ok(limiter) => limiter.with_observer(stats.clone()),
        Err(e) => {
            eprintln!("[BL] {}", e);
            return ExitCode::FAILURE;
        }
    };
    if cli.debug_logging {
        limiter = limiter.with_observer(Arc::new(DebugLogger::new()));
    }
    println!(
        "[BL] probing capacity={} fill_interval={:?} with {} workers for {}ms",
        limiter.capacity(),
        limiter.fill_interval(),
        cli.workers,
        cli.duration_ms
    );

    let limiter = Arc::new(limiter);
    let deadline = Instant::now() + Duration::from_millis(cli.duration_ms);
    let handles: Vec<_> = (0..cli.workers)
        .map(|_| {
            let limiter = Arc::clone(&limiter);
            tokio::spawn(async move {
                while Instant::now() < deadline {
                    limiter.allow();
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for handle in handles {
        if let Err(e) = handle.await {
            eprintln!("[BL] worker failed: {}", e);
        }
    }

    let snapshot = stats.snapshot();
    println!(
        "[BL] allowed: {}, denied: {}, refilled: {}",
        snapshot.allowed, snapshot.denied, snapshot.refilled
    );
    ExitCode::SUCCESS
}
