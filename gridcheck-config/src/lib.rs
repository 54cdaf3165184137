//! Loader for suite configuration with YAML + environment overlays.
//!
//! `gridcheck.yaml` describes the dashboard under test (base URL, login
//! credentials), the WebDriver endpoint, and the per-section checks to run.
//! `GRIDCHECK_`-prefixed environment variables override file values, and
//! `${VAR}` placeholders inside string values expand recursively so secrets
//! such as the login password never need to live in the file.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Deserialize)]
pub struct GridcheckConfig {
    pub version: Option<String>,
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub webdriver: WebdriverConfig,
    #[serde(default)]
    pub checks: ChecksConfig,
}

/// The dashboard under test and how to sign into it.
#[derive(Debug, Deserialize)]
pub struct DashboardConfig {
    pub base_url: String,
    pub credentials: Credentials,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct WebdriverConfig {
    #[serde(default = "default_webdriver_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub headless: bool,
    /// Upper bound for element-visibility waits, in seconds.
    #[serde(default = "default_wait_timeout")]
    pub wait_timeout_secs: u64,
}

impl Default for WebdriverConfig {
    fn default() -> Self {
        Self {
            endpoint: default_webdriver_endpoint(),
            headless: false,
            wait_timeout_secs: default_wait_timeout(),
        }
    }
}

/// Which sections to probe and what to read from each.
///
/// Every section is optional; an absent block skips that scenario.
#[derive(Debug, Default, Deserialize)]
pub struct ChecksConfig {
    #[serde(default)]
    pub dashboard: Option<MetricsCheck>,
    #[serde(default)]
    pub users: Option<TableCheck>,
    #[serde(default)]
    pub categories: Option<TableCheck>,
    #[serde(default)]
    pub deals: Option<TableCheck>,
    #[serde(default)]
    pub audit: Option<TableCheck>,
}

#[derive(Debug, Deserialize)]
pub struct MetricsCheck {
    pub metrics: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TableCheck {
    /// Header labels to read; matching is case/whitespace-insensitive.
    pub columns: Vec<String>,
    /// Pagination link text to follow before reading, when present.
    #[serde(default)]
    pub page: Option<String>,
}

fn default_webdriver_endpoint() -> String {
    "http://localhost:9515".into()
}
fn default_wait_timeout() -> u64 {
    10
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (YAML + env overrides).
pub struct GridcheckConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for GridcheckConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl GridcheckConfigLoader {
    /// Start with an empty builder; attach file sources, then [`load`].
    ///
    /// The `GRIDCHECK_` environment source is appended by [`load`] itself so
    /// it lands after every file source. The `config` crate gives later
    /// sources precedence, and the contract here is that env wins.
    ///
    /// [`load`]: GridcheckConfigLoader::load
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use gridcheck_config::GridcheckConfigLoader;
    ///
    /// let cfg = GridcheckConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// version: "1"
    /// dashboard:
    ///   base_url: "http://localhost:5173/"
    ///   credentials:
    ///     email: "qa@example.com"
    ///     password: "hunter2"
    /// checks:
    ///   categories:
    ///     columns: ["ID", "Name", "Status"]
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.dashboard.base_url, "http://localhost:5173/");
    /// assert_eq!(cfg.webdriver.endpoint, "http://localhost:9515");
    /// assert!(cfg.checks.users.is_none());
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// Sources are merged, `${VAR}` placeholders expanded, and the result
    /// materialised into the strongly typed [`GridcheckConfig`].
    pub fn load(self) -> Result<GridcheckConfig, ConfigError> {
        // Env goes in last so it overrides anything the files set.
        let cfg = self
            .builder
            .add_source(
                Environment::with_prefix("GRIDCHECK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: GridcheckConfig =
            serde_json::from_value(v).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}
