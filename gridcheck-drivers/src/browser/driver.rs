use crate::browser::{page::Page, typing::InputPacer};
use anyhow::Result;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;
use webdriver::capabilities::Capabilities;

/// Thin wrapper around a `fantoccini` WebDriver client.
pub struct Driver {
    pub client: Client,
    pacer: InputPacer,
    wait_timeout: Duration,
}

impl Driver {
    /// Create a new driver connected to a running WebDriver service
    /// (typically chromedriver on `http://localhost:9515`).
    ///
    /// `wait_timeout` bounds every element-visibility wait performed through
    /// the pages handed out by [`Driver::goto`].
    pub async fn connect(endpoint: &str, headless: bool, wait_timeout: Duration) -> Result<Self> {
        let mut caps = Capabilities::new();
        let mut chrome_opts = HashMap::new();

        let mut args = vec!["--disable-dev-shm-usage".to_string()];
        if headless {
            args.push("--headless".to_string());
            args.push("--disable-gpu".to_string());
        }
        chrome_opts.insert("args".to_string(), json!(args));

        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(endpoint)
            .await?;

        info!(target: "browser.driver", %endpoint, headless, "webdriver session established");

        Ok(Self {
            client,
            pacer: InputPacer::default(),
            wait_timeout,
        })
    }

    /// Hand out a [`Page`] bound to this session without navigating.
    pub fn page(&self) -> Page {
        Page::new(self.client.clone(), self.pacer.clone(), self.wait_timeout)
    }

    /// Navigate to `url` and return a [`Page`] for it.
    pub async fn goto(&self, url: &str) -> Result<Page> {
        let page = self.page();
        page.goto(url).await?;
        Ok(page)
    }

    /// Close the underlying browser session.
    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}
