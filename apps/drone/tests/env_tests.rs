//! Integration tests for the `DRONE_CONFIG` fallback.
//!
//! Kept in their own test binary: they mutate the process environment.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use drone::config::{self, CONFIG_ENV};
use drone_core::{DroneName, FleetConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn set_env(value: &str) {
    // SAFETY: the only test in this binary; no other thread reads the environment.
    unsafe { std::env::set_var(CONFIG_ENV, value) };
}

#[test]
fn test_env_var_fallback_and_empty_value() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[single_responsibility]\nname = \"Kestrel\"\n")
        .unwrap();
    file.flush().unwrap();

    set_env(file.path().to_str().unwrap());
    let fleet = config::load_or_default(None).unwrap();
    assert_eq!(fleet.single_responsibility.name, DroneName::new("Kestrel"));

    // An explicit flag still wins over the environment.
    let resolved = config::resolve_path(Some(std::path::Path::new("flag.toml")));
    assert_eq!(resolved.unwrap().to_str(), Some("flag.toml"));

    set_env("");
    assert!(config::resolve_path(None).is_none());
    let fleet = config::load_or_default(None).unwrap();
    assert_eq!(fleet, FleetConfig::default());
}
