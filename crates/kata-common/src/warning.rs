//! Deduplicated warnings on stderr.
//!
//! Library code never fails on input it can partially accept (a JSON field
//! the target kind has no slot for, for instance). It reports the loss here
//! instead, once per distinct message.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Every `[component] message` key printed since the last clear.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Print a warning for `component`, unless the same message was already
/// printed.
///
/// # Example
/// ```
/// kata_common::warning::warn_once("JSON", "field '0' dropped: template kind holds no fields");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let first_time = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if first_time {
        eprintln!("{}", format!("[kata {component}] warning: {message}").yellow());
    }
}

/// Whether `warn_once` has printed this exact message since the last clear.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Forget every recorded warning so each may print again.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    if let Some(set) = WARNED.lock().unwrap().as_mut() {
        set.clear();
    }
}
