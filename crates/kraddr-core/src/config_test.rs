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
fn build_app_config_succeeds_with_empty_environment() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert!(cfg.juso_confirm_key.is_none());
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.request_timeout_secs.is_none());
    assert_eq!(cfg.user_agent, "kraddr/0.1 (address-lookup)");
    assert_eq!(
        cfg.juso_endpoint,
        "https://business.juso.go.kr/addrlink/addrLinkApi.do"
    );
    assert_eq!(cfg.vworld_endpoint, "https://api.vworld.kr/req/address");
}

#[test]
fn juso_confirm_key_is_read_from_environment() {
    let mut map = HashMap::new();
    map.insert("JUSO_CONFIRM_KEY", "devU01TX0FVVEgyMDI1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.juso_confirm_key.as_deref(), Some("devU01TX0FVVEgyMDI1"));
}

#[test]
fn blank_juso_confirm_key_is_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("JUSO_CONFIRM_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.juso_confirm_key.is_none());
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("KRADDR_REQUEST_TIMEOUT_SECS", "15");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, Some(15));
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("KRADDR_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KRADDR_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(KRADDR_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn endpoint_overrides_are_accepted() {
    let mut map = HashMap::new();
    map.insert("KRADDR_JUSO_ENDPOINT", "http://127.0.0.1:8080/addrlink/addrLinkApi.do");
    map.insert("KRADDR_VWORLD_ENDPOINT", "http://127.0.0.1:8081/req/address");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.juso_endpoint,
        "http://127.0.0.1:8080/addrlink/addrLinkApi.do"
    );
    assert_eq!(cfg.vworld_endpoint, "http://127.0.0.1:8081/req/address");
}

#[test]
fn invalid_endpoint_is_rejected() {
    let mut map = HashMap::new();
    map.insert("KRADDR_VWORLD_ENDPOINT", "not a url");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KRADDR_VWORLD_ENDPOINT"),
        "expected InvalidEnvVar(KRADDR_VWORLD_ENDPOINT), got: {result:?}"
    );
}

#[test]
fn log_level_and_user_agent_overrides() {
    let mut map = HashMap::new();
    map.insert("KRADDR_LOG_LEVEL", "kraddr_juso=debug");
    map.insert("KRADDR_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "kraddr_juso=debug");
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
}

#[test]
fn debug_output_redacts_confirm_key() {
    let mut map = HashMap::new();
    map.insert("JUSO_CONFIRM_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"), "leaked key: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
