use gridcheck_config::GridcheckConfigLoader;
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn loads_file_with_env_placeholders() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
version: "1"
dashboard:
  base_url: "http://localhost:5173/"
  credentials:
    email: "qa@example.com"
    password: "${DASHBOARD_PASSWORD}"
webdriver:
  endpoint: "http://localhost:9515"
  headless: true
  wait_timeout_secs: 6
checks:
  dashboard:
    metrics: ["Total Users", "Active Deal"]
  users:
    page: "2"
    columns: ["Telegram ID", "Username", "Country"]
  deals:
    columns: ["Name", "Provider", "Status"]
"#;
    let p = write_yaml(&tmp, "gridcheck.yaml", file_yaml);

    let config = temp_env::with_var("DASHBOARD_PASSWORD", Some("s3cret"), || {
        GridcheckConfigLoader::new()
            .with_file(p)
            .load()
            .expect("load suite config")
    });

    assert_eq!(config.dashboard.credentials.password, "s3cret");
    assert!(config.webdriver.headless);
    assert_eq!(config.webdriver.wait_timeout_secs, 6);

    let users = config.checks.users.expect("users check present");
    assert_eq!(users.page.as_deref(), Some("2"));
    assert_eq!(users.columns.len(), 3);
    assert!(config.checks.categories.is_none());
}

#[test]
#[serial]
fn env_overrides_file_values() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
version: "1"
dashboard:
  base_url: "http://from-file:5173/"
  credentials:
    email: "qa@example.com"
    password: "pw"
"#;
    let p = write_yaml(&tmp, "gridcheck.yaml", file_yaml);

    let config = temp_env::with_var(
        "GRIDCHECK_DASHBOARD__BASE_URL",
        Some("http://from-env:5173/"),
        || {
            GridcheckConfigLoader::new()
                .with_file(p)
                .load()
                .expect("load suite config")
        },
    );

    assert_eq!(config.dashboard.base_url, "http://from-env:5173/");
}
