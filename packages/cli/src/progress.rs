//! Spinner shown while slow lookups run.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Run `f` behind a spinner labelled `message`.
///
/// The spinner is hidden when `enabled` is false and always cleared before
/// returning.
pub fn with_spinner<T>(enabled: bool, message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = if enabled {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };

    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = f();

    spinner.finish_and_clear();
    result
}
