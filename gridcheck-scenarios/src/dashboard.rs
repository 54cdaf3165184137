//! Metric panel checks for the dashboard landing section.
use crate::{wait_err, Scenario};
use async_trait::async_trait;
use gridcheck_common::{GridcheckError, Result};
use gridcheck_drivers::browser::page::{is_wait_timeout, xpath_literal, Page};
use tracing::info;

/// A metric panel's current value and its optional percentage change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricReading {
    pub value: String,
    pub percentage: Option<String>,
}

/// Locate the panel carrying `name` and read its value and percentage change.
///
/// A missing panel is [`GridcheckError::MetricNotFound`]; a panel without the
/// green percentage element simply reads as `percentage: None`.
pub async fn read_metric(page: &Page, name: &str) -> Result<MetricReading> {
    // Panels share the `.p-5` card class; match the one containing the name.
    let panel_xpath = format!(
        "//*[contains(concat(' ', normalize-space(@class), ' '), ' p-5 ')][contains(., {})]",
        xpath_literal(name)
    );
    let panel = match page.wait_for_xpath(&panel_xpath).await {
        Ok(panel) => panel,
        Err(err) if is_wait_timeout(&err) => {
            return Err(GridcheckError::MetricNotFound(name.to_string()))
        }
        Err(err) => return Err(err.into()),
    };

    let value = panel.find("dd > div.text-2xl").await?.text().await?;
    let percentage = match panel.find("dd > div.text-green-600").await {
        Ok(element) => Some(element.text().await?.trim().to_string()),
        Err(_) => None,
    };

    let reading = MetricReading {
        value: value.trim().to_string(),
        percentage,
    };
    info!(
        target: "scenario.dashboard",
        metric = name,
        value = %reading.value,
        percentage = reading.percentage.as_deref().unwrap_or("-"),
        "metric read"
    );
    Ok(reading)
}

/// Checks each configured metric panel on the dashboard landing page.
pub struct DashboardScenario {
    metrics: Vec<String>,
}

impl DashboardScenario {
    pub fn new(metrics: Vec<String>) -> Self {
        Self { metrics }
    }
}

#[async_trait]
impl Scenario for DashboardScenario {
    fn name(&self) -> &str {
        "dashboard"
    }

    async fn run(&self, page: &Page) -> Result<()> {
        page.click_text("Dashboard").await.map_err(wait_err)?;
        page.wait_for(".p-5").await.map_err(wait_err)?;

        for metric in &self.metrics {
            read_metric(page, metric).await?;
        }
        Ok(())
    }
}
