use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Run `work` with a spinner on stderr, clearing it once the work settles.
///
/// The spinner is cleared whatever the outcome, so an error printed right
/// after doesn't share a line with it.
pub async fn with_spinner<F: Future>(message: &str, work: F) -> F::Output {
    let spinner = ProgressBar::new_spinner().with_message(format!("{}...", message));
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
    }
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = work.await;
    spinner.finish_and_clear();
    output
}
