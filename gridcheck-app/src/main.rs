use anyhow::Result;
use clap::Parser;
use gridcheck_common::observability::{init_logging, LogConfig, LogFormat};
use gridcheck_common::GridcheckError;
use gridcheck_config::GridcheckConfigLoader;
use gridcheck_drivers::browser::driver::Driver;
use gridcheck_scenarios::{session, step, Suite};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};
use url::Url;

/// Probe a web dashboard: sign in, walk its sections, and read table and
/// metric data.
#[derive(Parser)]
#[command(name = "gridcheck", version)]
struct Args {
    /// Path to the suite configuration.
    #[arg(long, default_value = "gridcheck.yaml")]
    config: PathBuf,

    /// Run the browser headless regardless of the config.
    #[arg(long)]
    headless: bool,

    /// Run only the named scenario (e.g. "users").
    #[arg(long)]
    only: Option<String>,

    /// Duplicate log events to stderr.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1) Load config (env wins)
    let cfg = GridcheckConfigLoader::new().with_file(&args.config).load()?;

    let log_path = init_logging(LogConfig {
        emit_stderr: args.verbose,
        format: LogFormat::Text,
        ..LogConfig::default()
    })?;
    info!(log = %log_path.display(), "gridcheck starting");

    let base_url = Url::parse(&cfg.dashboard.base_url)
        .map_err(|e| GridcheckError::Config(format!("invalid dashboard.base_url: {e}")))?;

    let headless = args.headless || cfg.webdriver.headless;
    let driver = Driver::connect(
        &cfg.webdriver.endpoint,
        headless,
        Duration::from_secs(cfg.webdriver.wait_timeout_secs),
    )
    .await?;
    let page = driver.page();

    let mut suite = Suite::from_config(cfg.checks);
    if let Some(only) = &args.only {
        suite.retain(only);
        if suite.is_empty() {
            driver.close().await?;
            anyhow::bail!("no configured scenario named \"{only}\"");
        }
    }

    step(
        "login",
        session::login(&page, base_url.as_str(), &cfg.dashboard.credentials),
    )
    .await?;

    let report = suite.run(&page).await;

    // A failed logout shouldn't mask scenario results.
    if let Err(err) = step("logout", session::logout(&page)).await {
        error!(error = %err, "logout failed");
    }
    driver.close().await?;

    info!(
        passed = report.passed.len(),
        failed = report.failed.len(),
        "suite finished"
    );
    for (scenario, reason) in &report.failed {
        error!(scenario = %scenario, reason = %reason, "scenario failed");
    }

    if !report.all_passed() {
        anyhow::bail!(
            "{} of {} scenarios failed",
            report.failed.len(),
            report.failed.len() + report.passed.len()
        );
    }
    Ok(())
}
