use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// Defaults and overrides
// =============================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.backend_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.backend_timeout, Duration::from_secs(30));
}

#[test]
fn overrides_are_parsed() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://rig.local:5001"),
        ("BACKEND_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://rig.local:5001");
    assert_eq!(cfg.backend_timeout, Duration::from_secs(5));
}

#[test]
fn backend_url_trailing_slashes_are_trimmed() {
    let cfg = HostConfig::from_lookup(lookup(&[("BACKEND_URL", " http://10.0.0.2:5000// ")])).unwrap();
    assert_eq!(cfg.backend_url, "http://10.0.0.2:5000");
}

// =============================================================
// Invalid values
// =============================================================

#[test]
fn non_numeric_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    assert!(err.to_string().contains("\"eighty\""));
}

#[test]
fn zero_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
}

#[test]
fn backend_url_without_scheme_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BACKEND_URL", "127.0.0.1:5000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "BACKEND_URL", .. }));
}

#[test]
fn backend_url_without_host_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("BACKEND_URL", "http://")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "BACKEND_URL", value: "http://".into(), reason: "missing host" });
}

#[test]
fn zero_or_garbage_timeout_is_rejected() {
    for raw in ["0", "-1", "soon"] {
        let err = HostConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BACKEND_TIMEOUT_SECS", .. }), "{raw}");
    }
}
