//! Progress reporting: count-style bars over users and tweets.

use indicatif::{ProgressBar, ProgressStyle};

/// Count-style progress bar (items processed out of total), with an optional label.
/// Falls back to the default bar style if the template is rejected.
pub fn make_count_progress(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
         elapsed: {elapsed_precise}",
    ) {
        pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
    }
    if !label.is_empty() {
        pb.set_message(label.to_string());
    }
    pb
}

/// A bar when enabled, a hidden one otherwise, so callers can `inc` unconditionally.
pub fn maybe_count_progress(enabled: bool, total: u64, label: &str) -> ProgressBar {
    if enabled { make_count_progress(total, label) } else { ProgressBar::hidden() }
}
