use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.local_url(), "http://localhost:3000");
}

#[test]
fn build_app_config_reads_port_override() {
    let mut map = HashMap::new();
    map.insert("PORT", "8080");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr().port(), 8080);
}

#[test]
fn build_app_config_treats_blank_port_as_unset() {
    let mut map = HashMap::new();
    map.insert("PORT", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn build_app_config_fails_with_invalid_port() {
    let mut map = HashMap::new();
    map.insert("PORT", "not-a-port");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PORT"),
        "expected InvalidEnvVar(PORT), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_out_of_range_port() {
    let mut map = HashMap::new();
    map.insert("PORT", "70000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PORT"));
}

#[test]
fn build_app_config_reads_bind_host_override() {
    let mut map = HashMap::new();
    map.insert("VIDSUM_BIND_HOST", "127.0.0.1");
    map.insert("PORT", "4000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:4000");
}

#[test]
fn build_app_config_fails_with_invalid_bind_host() {
    let mut map = HashMap::new();
    map.insert("VIDSUM_BIND_HOST", "localhost:3000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "VIDSUM_BIND_HOST"),
        "expected InvalidEnvVar(VIDSUM_BIND_HOST), got: {result:?}"
    );
}

#[test]
fn build_app_config_reads_log_level_override() {
    let mut map = HashMap::new();
    map.insert("VIDSUM_LOG_LEVEL", "debug,tower_http=trace");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug,tower_http=trace");
}
