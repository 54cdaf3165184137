//! End-to-end run against a locally running dashboard.
//!
//! Requires chromedriver on :9515 and the dashboard dev server; run with
//! `cargo test -- --ignored` and `GRIDCHECK_EMAIL`/`GRIDCHECK_PASSWORD` set.
mod common;

use std::time::Duration;

use gridcheck_config::GridcheckConfigLoader;
use gridcheck_drivers::browser::driver::Driver;
use gridcheck_scenarios::{session, Suite};

#[tokio::test]
#[ignore = "requires chromedriver and the dashboard running locally"]
async fn full_suite_against_local_dashboard() {
    common::init_test_tracing();

    let cfg = GridcheckConfigLoader::new()
        .with_file("../gridcheck.yaml")
        .load()
        .expect("load suite config");

    let driver = Driver::connect(
        &cfg.webdriver.endpoint,
        true,
        Duration::from_secs(cfg.webdriver.wait_timeout_secs),
    )
    .await
    .expect("webdriver session");
    let page = driver.page();

    session::login(&page, &cfg.dashboard.base_url, &cfg.dashboard.credentials)
        .await
        .expect("sign in");

    let suite = Suite::from_config(cfg.checks);
    let report = suite.run(&page).await;

    session::logout(&page).await.expect("sign out");
    driver.close().await.expect("close session");

    assert!(
        report.all_passed(),
        "failed scenarios: {:?}",
        report.failed
    );
}
