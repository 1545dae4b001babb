use anyhow::Result;
use std::process::ExitCode;
use sysmon::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "collection failed");
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let app_config = config::AppConfig::load()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        storage = ?app_config.storage.provider,
        "collecting metrics"
    );
    let monitor = monitor::SystemMonitor::from_config(&app_config);

    println!("{}", models::HEADER);
    println!("{}", models::COLLECTING);
    println!();

    let report = monitor.collect()?;
    tracing::info!(?report, "metrics collected");

    println!("{}", report);
    println!();
    println!("{}", models::COMPLETED);
    Ok(())
}
