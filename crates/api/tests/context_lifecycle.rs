//! Integration tests for AppContext construction

use dealboard_api::AppContext;
use dealboard_domain::{Config, DealboardError};
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> Config {
    let mut config = Config::new("https://portal.example.com/rest/1/abc", vec![3, 4]);
    config.cache.directory = Some(dir.path().join("cache"));
    config.logging.request_log_dir = dir.path().join("logs");
    config
}

#[test]
fn context_builds_from_valid_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut config = test_config(&dir);
    config.server.timezone = "Europe/London".into();

    let context = AppContext::new(&config).expect("context should build");

    let settings = context.reports.settings();
    assert_eq!(settings.timezone, chrono_tz::Europe::London);
    assert_eq!(settings.sales_department_ids, vec![3, 4]);
    assert_eq!(context.audit.root(), dir.path().join("logs"));
}

#[test]
fn unknown_timezone_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    let mut config = test_config(&dir);
    config.server.timezone = "Mars/Olympus_Mons".into();

    let result = AppContext::new(&config);

    assert!(matches!(result, Err(DealboardError::Config(_))));
}
