use crate::browser::typing::InputPacer;
use anyhow::Result;
use fantoccini::error::CmdError;
use fantoccini::{elements::Element, Client, Locator};
use gridcheck_table::TableSnapshot;
use std::time::Duration;
use tracing::debug;

/// High-level page wrapper providing element queries and table capture.
pub struct Page {
    pub(crate) client: Client,
    pacer: InputPacer,
    wait_timeout: Duration,
}

impl Page {
    pub(crate) fn new(client: Client, pacer: InputPacer, wait_timeout: Duration) -> Self {
        Self {
            client,
            pacer,
            wait_timeout,
        }
    }

    /// Navigate to `url`.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.client.goto(url).await.map_err(anyhow::Error::from)
    }

    /// Return the page title.
    pub async fn title(&self) -> Result<String> {
        self.client.title().await.map_err(anyhow::Error::from)
    }

    /// Return the current page URL.
    pub async fn current_url(&self) -> Result<String> {
        self.client
            .current_url()
            .await
            .map(|url| url.to_string())
            .map_err(anyhow::Error::from)
    }

    /// Wait for a single element matching the CSS selector, bounded by the
    /// configured wait timeout.
    pub async fn wait_for(&self, selector: &str) -> Result<PageElement> {
        let element = self
            .client
            .wait()
            .at_most(self.wait_timeout)
            .for_element(Locator::Css(selector))
            .await?;
        Ok(PageElement::new(element, &self.pacer))
    }

    /// Find zero or more elements by CSS selector, without waiting.
    pub async fn find_all(&self, selector: &str) -> Result<Vec<PageElement>> {
        let elements = self.client.find_all(Locator::Css(selector)).await?;

        Ok(elements
            .into_iter()
            .map(|element| PageElement::new(element, &self.pacer))
            .collect())
    }

    /// Find an element by its exact visible text (navigation links, buttons).
    pub async fn find_text(&self, text: &str) -> Result<PageElement> {
        let xpath = format!("//*[normalize-space(text())={}]", xpath_literal(text));
        self.wait_for_xpath(&xpath).await
    }

    /// Click the element carrying the exact visible text.
    pub async fn click_text(&self, text: &str) -> Result<()> {
        self.find_text(text).await?.click().await
    }

    /// Wait for a single element matching the XPath expression.
    pub async fn wait_for_xpath(&self, xpath: &str) -> Result<PageElement> {
        let element = self
            .client
            .wait()
            .at_most(self.wait_timeout)
            .for_element(Locator::XPath(xpath))
            .await?;
        Ok(PageElement::new(element, &self.pacer))
    }

    /// Find zero or more elements by XPath, without waiting.
    pub async fn find_all_xpath(&self, xpath: &str) -> Result<Vec<PageElement>> {
        let elements = self.client.find_all(Locator::XPath(xpath)).await?;
        Ok(elements
            .into_iter()
            .map(|element| PageElement::new(element, &self.pacer))
            .collect())
    }

    /// Find a form input by its accessible name: `aria-label`, placeholder,
    /// or the text of a preceding `<label>`.
    pub async fn find_labelled_input(&self, label: &str) -> Result<PageElement> {
        let lit = xpath_literal(label);
        let xpath = format!(
            "//input[@aria-label={lit} or @placeholder={lit}] \
             | //label[normalize-space(text())={lit}]/following::input[1]"
        );
        self.wait_for_xpath(&xpath).await
    }

    /// Capture the currently rendered table: `th` texts as the header row and
    /// each `tbody tr`'s `td` texts as a body row.
    ///
    /// The snapshot is a point-in-time copy; re-capture after any navigation
    /// or re-render.
    pub async fn table_snapshot(&self) -> Result<TableSnapshot> {
        let mut headers = Vec::new();
        for th in self.client.find_all(Locator::Css("th")).await? {
            headers.push(th.text().await?);
        }

        let mut rows = Vec::new();
        for tr in self.client.find_all(Locator::Css("tbody tr")).await? {
            let mut cells = Vec::new();
            for td in tr.find_all(Locator::Css("td")).await? {
                cells.push(td.text().await?);
            }
            rows.push(cells);
        }

        debug!(
            target: "browser.table",
            columns = headers.len(),
            rows = rows.len(),
            "captured table snapshot"
        );
        Ok(TableSnapshot::new(headers, rows))
    }
}

/// Whether an error from a page query was an element-wait timeout.
pub fn is_wait_timeout(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<CmdError>(), Some(CmdError::WaitTimeout))
}

/// Quote a string for embedding in an XPath expression.
///
/// XPath 1.0 has no escape syntax, so strings containing both quote kinds
/// fall back to `concat()`.
pub fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        format!("'{text}'")
    } else if !text.contains('"') {
        format!("\"{text}\"")
    } else {
        let parts: Vec<String> = text
            .split('\'')
            .map(|part| format!("'{part}'"))
            .collect();
        format!("concat({})", parts.join(", \"'\", "))
    }
}

// =========================
// PageElement Definition
// =========================

#[derive(Clone)]
/// Wrapper for DOM elements that provides typed helpers consistent with [`Page`].
pub struct PageElement {
    pub element: Element,
    pacer: InputPacer,
}

impl PageElement {
    fn new(element: Element, pacer: &InputPacer) -> Self {
        Self {
            element,
            pacer: pacer.clone(),
        }
    }

    /// Click the element.
    pub async fn click(&self) -> Result<()> {
        self.element
            .clone()
            .click()
            .await
            .map(|_| ())
            .map_err(anyhow::Error::from)
    }

    /// Type into the element using paced keystrokes.
    pub async fn type_str(&self, text: &str) -> Result<()> {
        self.pacer.type_into(&self.element, text).await
    }

    /// Find a child element by CSS selector.
    pub async fn find(&self, selector: &str) -> Result<PageElement> {
        let element = self.element.find(Locator::Css(selector)).await?;
        Ok(PageElement::new(element, &self.pacer))
    }

    /// Find zero or more child elements by CSS selector.
    pub async fn find_all(&self, selector: &str) -> Result<Vec<PageElement>> {
        let elements = self.element.find_all(Locator::Css(selector)).await?;
        Ok(elements
            .into_iter()
            .map(|element| PageElement::new(element, &self.pacer))
            .collect())
    }

    /// Read an attribute value.
    pub async fn attr(&self, attribute: &str) -> Result<Option<String>> {
        self.element
            .attr(attribute)
            .await
            .map_err(anyhow::Error::from)
    }

    /// Return the element's visible text.
    pub async fn text(&self) -> Result<String> {
        self.element.text().await.map_err(anyhow::Error::from)
    }

    /// Whether the element is currently rendered visibly.
    pub async fn is_displayed(&self) -> Result<bool> {
        self.element
            .is_displayed()
            .await
            .map_err(anyhow::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::xpath_literal;

    #[test]
    fn plain_text_uses_single_quotes() {
        assert_eq!(xpath_literal("Logout"), "'Logout'");
    }

    #[test]
    fn apostrophes_switch_to_double_quotes() {
        assert_eq!(xpath_literal("User's"), "\"User's\"");
    }

    #[test]
    fn mixed_quotes_fall_back_to_concat() {
        assert_eq!(
            xpath_literal(r#"a'b"c"#),
            r#"concat('a', "'", 'b"c')"#
        );
    }
}
