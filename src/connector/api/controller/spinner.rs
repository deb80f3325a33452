use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a request is pending. Hidden when stderr is not a
/// terminal.
pub fn pending_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
