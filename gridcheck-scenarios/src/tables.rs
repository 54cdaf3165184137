//! Generic navigate-and-read-columns check for table-backed sections.
//!
//! Users, categories, and the audit log all render the same way: a nav link,
//! a header row, and a body of records. One scenario covers them; the config
//! decides which columns to read and whether to follow a pagination link
//! first.
use crate::{wait_err, Scenario};
use async_trait::async_trait;
use gridcheck_common::Result;
use gridcheck_config::TableCheck;
use gridcheck_drivers::browser::page::{xpath_literal, Page};
use tracing::info;

pub struct TableSectionScenario {
    name: &'static str,
    nav_text: &'static str,
    check: TableCheck,
}

impl TableSectionScenario {
    pub fn new(name: &'static str, nav_text: &'static str, check: TableCheck) -> Self {
        Self {
            name,
            nav_text,
            check,
        }
    }
}

/// The value logged for a column: the second row when present (the first row
/// is often a fixture or aggregate), else "N/A".
fn sample_value(values: &[String]) -> String {
    values
        .get(1)
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| "N/A".to_string())
}

#[async_trait]
impl Scenario for TableSectionScenario {
    fn name(&self) -> &str {
        self.name
    }

    async fn run(&self, page: &Page) -> Result<()> {
        page.click_text(self.nav_text).await.map_err(wait_err)?;
        page.wait_for("th").await.map_err(wait_err)?;

        // Follow the pagination link when configured and present.
        if let Some(page_number) = &self.check.page {
            let link_xpath = format!(
                "//a[normalize-space(text())={}]",
                xpath_literal(page_number)
            );
            let links = page.find_all_xpath(&link_xpath).await?;
            if let Some(link) = links.first() {
                link.click().await?;
                info!(target: "scenario.table", section = self.name, page = %page_number, "followed pagination");
                page.wait_for("th").await.map_err(wait_err)?;
            }
        }

        let table = page.table_snapshot().await?;
        info!(
            target: "scenario.table",
            section = self.name,
            rows = table.row_count(),
            "table captured"
        );

        for column in &self.check.columns {
            let values = table.column(column)?;
            info!(
                target: "scenario.table",
                section = self.name,
                column = %column,
                sample = %sample_value(&values),
                "column read"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::sample_value;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn samples_the_second_row() {
        assert_eq!(sample_value(&strings(&["first", "second", "third"])), "second");
    }

    #[test]
    fn short_or_empty_columns_sample_as_na() {
        assert_eq!(sample_value(&strings(&["only"])), "N/A");
        assert_eq!(sample_value(&[]), "N/A");
        assert_eq!(sample_value(&strings(&["first", ""])), "N/A");
    }
}
