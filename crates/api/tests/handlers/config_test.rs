use std::time::Duration;

use ministry_api::config::{ApiConfig, DEFAULT_ADMIN_PASSWORD};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tracing::Level;

#[test]
fn test_config_defaults() {
    let config = ApiConfig::from_lookup(|_| None).unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.admin_password, DEFAULT_ADMIN_PASSWORD);
    assert_eq!(config.demo_latency, Duration::from_millis(600));
}

#[test]
fn test_config_overrides() {
    let config = ApiConfig::from_lookup(|key: &str| {
        let value = match key {
            "API_HOST" => "127.0.0.1",
            "API_PORT" => "8080",
            "LOG_LEVEL" => "debug",
            "API_CORS_ORIGINS" => "http://localhost:5173, https://ministry.example",
            "ADMIN_PASSWORD" => "letmein",
            "DEMO_LATENCY_MS" => "0",
            _ => return None,
        };
        Some(value.to_string())
    })
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec!["http://localhost:5173".to_string(), "https://ministry.example".to_string()])
    );
    assert_eq!(config.admin_password, "letmein");
    assert_eq!(config.demo_latency, Duration::ZERO);
}

#[rstest]
#[case("API_PORT", "not-a-port")]
#[case("DEMO_LATENCY_MS", "soon")]
fn test_config_rejects_bad_numbers(#[case] key: &'static str, #[case] value: &'static str) {
    let result = ApiConfig::from_lookup(|k: &str| (k == key).then(|| value.to_string()));
    assert!(result.is_err());
}
