//! `clear_warnings` lives in its own test binary: the warning set is
//! process-global and other tests would race with the clear.

use kata_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_clear_warnings_forgets_everything() {
    warn_once("TEST", "before clear");
    assert!(has_warned("TEST", "before clear"));

    clear_warnings();

    assert!(!has_warned("TEST", "before clear"));
    warn_once("TEST", "before clear");
    assert!(has_warned("TEST", "before clear"));
}
