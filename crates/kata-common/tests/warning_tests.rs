//! Tests for the deduplicated warning set.

use kata_common::warning::{has_warned, warn_once};

#[test]
fn test_warn_once_records_message() {
    warn_once("TEST", "recorded message");
    assert!(has_warned("TEST", "recorded message"));
    assert!(!has_warned("TEST", "never printed"));
}

#[test]
fn test_component_is_part_of_the_key() {
    warn_once("ALPHA", "shared text");
    assert!(has_warned("ALPHA", "shared text"));
    assert!(!has_warned("BETA", "shared text"));
}

#[test]
fn test_repeated_warning_is_harmless() {
    warn_once("TEST", "repeated");
    warn_once("TEST", "repeated");
    assert!(has_warned("TEST", "repeated"));
}
