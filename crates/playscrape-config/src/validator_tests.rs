use super::*;

#[test]
fn test_validate_default_config() {
    let result = ConfigValidator::validate(&Config::default());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
    assert!(result.first_error().is_none());
}

#[test]
fn test_validate_invalid_port() {
    let mut config = Config::default();
    config.server.port = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "server.port"));
}

#[test]
fn test_validate_empty_selector() {
    let mut config = Config::default();
    config.scrape.title_selector = "   ".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "scrape.title_selector"));
}

#[test]
fn test_validate_zero_ceilings() {
    let mut config = Config::default();
    config.scrape.scroll_settle_ms = 0;
    config.scrape.max_scroll_iterations = 0;
    config.scrape.max_load_ms = 0;

    let result = ConfigValidator::validate(&config);
    let paths: Vec<&str> = result.errors.iter().map(|e| e.path.as_str()).collect();
    assert!(paths.contains(&"scrape.scroll_settle_ms"));
    assert!(paths.contains(&"scrape.max_scroll_iterations"));
    assert!(paths.contains(&"scrape.max_load_ms"));
}

#[test]
fn test_validate_zero_max_pages() {
    let mut config = Config::default();
    config.browser.max_pages = 0;

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "browser.max_pages"));
}

#[test]
fn test_settle_longer_than_ceiling_warns() {
    let mut config = Config::default();
    config.scrape.scroll_settle_ms = 10_000;
    config.scrape.max_load_ms = 5_000;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "scrape.scroll_settle_ms"));
}

#[test]
fn test_request_timeout_shorter_than_load_warns() {
    let mut config = Config::default();
    config.server.request_timeout_ms = 60_000;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "server.request_timeout_ms"));
}

#[test]
fn test_missing_chrome_path_warns() {
    let mut config = Config::default();
    config.browser.chrome_path = Some("/nonexistent/chrome".into());

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "browser.chrome_path"));
}

#[test]
fn test_first_error_converts() {
    let mut config = Config::default();
    config.server.host = String::new();

    let err = ConfigValidator::validate(&config).first_error().unwrap();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.host"));
}
