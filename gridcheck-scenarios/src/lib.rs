//! Section checks for the dashboard under test.
//!
//! Each scenario drives one section of the dashboard through a
//! [`Page`](gridcheck_drivers::browser::page::Page): navigate to it, wait for
//! its content, and read the configured table columns or metric panels. The
//! [`Suite`] assembles the scenarios a config enables and runs them in order,
//! recording pass/fail per scenario rather than aborting on the first failure.
//!
//! - [`session`]: sign-in/sign-out flow
//! - [`dashboard`]: metric panel checks
//! - [`tables`]: generic navigate-and-read-columns sections
//! - [`deals`]: the deals section with random row sampling
use async_trait::async_trait;
use gridcheck_common::{GridcheckError, Result};
use gridcheck_config::ChecksConfig;
use gridcheck_drivers::browser::page::{is_wait_timeout, Page};
use tracing::{error, info};

pub mod dashboard;
pub mod deals;
pub mod session;
pub mod tables;

/// One self-contained check against a dashboard section.
#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self, page: &Page) -> Result<()>;
}

/// Run a scenario step, logging the failure with its context before
/// propagating it. The caller decides whether to retry, skip, or fail.
pub async fn step<T, F>(name: &str, fut: F) -> Result<T>
where
    F: std::future::Future<Output = Result<T>>,
{
    match fut.await {
        Ok(value) => Ok(value),
        Err(err) => {
            error!(target: "scenario", step = name, error = %err, "step failed");
            Err(err)
        }
    }
}

/// Map a driver error into the workspace error, surfacing wait timeouts
/// as [`GridcheckError::Timeout`].
pub(crate) fn wait_err(err: anyhow::Error) -> GridcheckError {
    if is_wait_timeout(&err) {
        GridcheckError::Timeout
    } else {
        GridcheckError::Driver(err)
    }
}

/// Outcome of a full suite run.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub passed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The ordered set of scenarios a config enables.
pub struct Suite {
    scenarios: Vec<Box<dyn Scenario>>,
}

impl Suite {
    /// Build the suite from the `checks` block of the configuration.
    ///
    /// Sections absent from the config are skipped entirely; order follows
    /// the dashboard's navigation.
    pub fn from_config(checks: ChecksConfig) -> Self {
        let mut scenarios: Vec<Box<dyn Scenario>> = Vec::new();

        if let Some(check) = checks.dashboard {
            scenarios.push(Box::new(dashboard::DashboardScenario::new(check.metrics)));
        }
        if let Some(check) = checks.users {
            scenarios.push(Box::new(tables::TableSectionScenario::new(
                "users", "Users", check,
            )));
        }
        if let Some(check) = checks.categories {
            scenarios.push(Box::new(tables::TableSectionScenario::new(
                "categories",
                "Categories",
                check,
            )));
        }
        if let Some(check) = checks.deals {
            scenarios.push(Box::new(deals::DealsScenario::new(check)));
        }
        if let Some(check) = checks.audit {
            scenarios.push(Box::new(tables::TableSectionScenario::new(
                "audit",
                "Audit Logs",
                check,
            )));
        }

        Self { scenarios }
    }

    /// Keep only the scenario whose name matches `name`.
    pub fn retain(&mut self, name: &str) {
        self.scenarios.retain(|s| s.name() == name);
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Run every scenario in order against the signed-in page.
    pub async fn run(&self, page: &Page) -> SuiteReport {
        let mut report = SuiteReport::default();
        for scenario in &self.scenarios {
            info!(target: "scenario", scenario = scenario.name(), "running");
            match step(scenario.name(), scenario.run(page)).await {
                Ok(()) => {
                    info!(target: "scenario", scenario = scenario.name(), "passed");
                    report.passed.push(scenario.name().to_string());
                }
                Err(err) => {
                    report
                        .failed
                        .push((scenario.name().to_string(), err.to_string()));
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcheck_config::GridcheckConfigLoader;

    fn checks_from(yaml: &str) -> ChecksConfig {
        GridcheckConfigLoader::new()
            .with_yaml_str(yaml)
            .load()
            .expect("valid config")
            .checks
    }

    #[test]
    fn suite_follows_config_and_navigation_order() {
        let checks = checks_from(
            r#"
dashboard:
  base_url: "http://localhost:5173/"
  credentials: { email: "qa@example.com", password: "pw" }
checks:
  audit:
    columns: ["Timestamp", "Admin"]
  dashboard:
    metrics: ["Total Users"]
  categories:
    columns: ["ID", "Name", "Status"]
"#,
        );
        let suite = Suite::from_config(checks);
        assert_eq!(suite.len(), 3);
    }

    #[test]
    fn empty_checks_build_an_empty_suite() {
        let checks = checks_from(
            r#"
dashboard:
  base_url: "http://localhost:5173/"
  credentials: { email: "qa@example.com", password: "pw" }
"#,
        );
        assert!(Suite::from_config(checks).is_empty());
    }

    #[test]
    fn retain_filters_by_scenario_name() {
        let checks = checks_from(
            r#"
dashboard:
  base_url: "http://localhost:5173/"
  credentials: { email: "qa@example.com", password: "pw" }
checks:
  users:
    columns: ["Username"]
  deals:
    columns: ["Name"]
"#,
        );
        let mut suite = Suite::from_config(checks);
        suite.retain("deals");
        assert_eq!(suite.len(), 1);
    }
}
