//! Settings loading through defaults and environment overrides

use serial_test::serial;
use SportsBuddy::config::{Settings, StorageBackend};

const OVERRIDES: [&str; 4] = [
    "SPORTSBUDDY__STORAGE__BACKEND",
    "SPORTSBUDDY__SESSION__LATENCY_MS",
    "SPORTSBUDDY__FILTER__CASE_INSENSITIVE_LOCATION",
    "SPORTSBUDDY__CATALOG__FEATURED_EVENTS",
];

fn clear_overrides() {
    for key in OVERRIDES {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_load_and_validate() {
    clear_overrides();
    let settings = Settings::new().unwrap();

    assert_eq!(settings.storage.backend, StorageBackend::File);
    assert_eq!(settings.storage.slot_key, "sportsBuddyUser");
    assert_eq!(settings.session.latency_ms, 1000);
    assert!(!settings.filter.case_insensitive_location);
    assert_eq!(settings.catalog.featured_events, 3);
    assert_eq!(settings.catalog.featured_users, 4);
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_overrides();
    std::env::set_var("SPORTSBUDDY__STORAGE__BACKEND", "memory");
    std::env::set_var("SPORTSBUDDY__SESSION__LATENCY_MS", "0");
    std::env::set_var("SPORTSBUDDY__FILTER__CASE_INSENSITIVE_LOCATION", "true");

    let settings = Settings::new().unwrap();
    clear_overrides();

    assert_eq!(settings.storage.backend, StorageBackend::Memory);
    assert_eq!(settings.session.latency_ms, 0);
    assert!(settings.filter.case_insensitive_location);
}

#[test]
#[serial]
fn test_invalid_override_fails_validation() {
    clear_overrides();
    std::env::set_var("SPORTSBUDDY__CATALOG__FEATURED_EVENTS", "0");

    let settings = Settings::new().unwrap();
    clear_overrides();

    assert!(settings.validate().is_err());
}
