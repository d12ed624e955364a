use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Marker that twarc2-flattened tweet dumps carry in their file name.
pub const FLATTENED_MARKER: &str = "flattened";

pub const OUTPUT_NAME_ACCOUNTS: &str = "account_data_clean";
pub const OUTPUT_NAME_FB_TEN: &str = "fb_top_ten_entities_by_month";
pub const OUTPUT_NAME_CITIZEN_BROWSER: &str = "citizen_browser_entities_by_month";

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct EtlOptions {
    pub output_dir: PathBuf,            // where output files land; cwd by default
    pub date_stamp: Option<String>,     // "YYYY-MM-DD"; None = today
    pub progress: bool,                 // show progress bars
    pub flattened_marker: String,       // required substring in extractor input paths
}

impl Default for EtlOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            date_stamp: None,
            progress: true,
            flattened_marker: FLATTENED_MARKER.to_string(),
        }
    }
}

impl EtlOptions {
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_date_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.date_stamp = Some(stamp.into());
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_flattened_marker(mut self, marker: impl Into<String>) -> Self {
        self.flattened_marker = marker.into();
        self
    }

    /// Resolved date stamp for output names.
    pub fn stamp(&self) -> String {
        self.date_stamp.clone().unwrap_or_else(crate::date::today_stamp)
    }

    /// `<output_dir>/<stem>_<stamp>.<ext>`
    pub fn output_path(&self, stem: &str, ext: &str) -> PathBuf {
        self.output_dir.join(format!("{}_{}.{}", stem, self.stamp(), ext))
    }
}

/// Every extractor input must be a flattened dump; checked on the full path string.
pub fn ensure_flattened<'a, I>(paths: I, marker: &str) -> Result<(), ConfigError>
where
    I: IntoIterator<Item = &'a Path>,
{
    for p in paths {
        if !p.to_string_lossy().contains(marker) {
            return Err(ConfigError::NotFlattened(p.to_path_buf()));
        }
    }
    Ok(())
}
