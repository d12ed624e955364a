use crate::accounts::{flatten_documents, write_accounts_csv};
use crate::aggregate::{IngestStats, MonthlyEntities, Tweet};
use crate::config::{ensure_flattened, EtlOptions, OUTPUT_NAME_ACCOUNTS};
use crate::error::ConfigError;
use crate::ndjson::read_ndjson;
use crate::progress::maybe_count_progress;
use crate::sources::RankedSource;
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
pub struct TwitterETL {
    pub(crate) opts: EtlOptions,
}

/// Paths written by [`TwitterETL::extract_top_entities`].
#[derive(Clone, Debug)]
pub struct EntityOutputs {
    pub fb_top_ten: PathBuf,
    pub citizen_browser: PathBuf,
}

impl TwitterETL {
    pub fn new() -> Self {
        Self { opts: EtlOptions::default() }
    }

    // -------- Builder methods --------
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_output_dir(dir); self }
    pub fn date_stamp(mut self, stamp: impl Into<String>) -> Self { self.opts = self.opts.with_date_stamp(stamp); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn flattened_marker(mut self, marker: impl Into<String>) -> Self { self.opts = self.opts.with_flattened_marker(marker); self }

    pub fn options(&self) -> &EtlOptions {
        &self.opts
    }

    // -------- Account flattener --------

    /// Flatten a twarc2 user lookup file into `account_data_clean_<date>.csv`.
    /// Returns the CSV path.
    pub fn clean_account_data(&self, input: &Path) -> Result<PathBuf> {
        init_tracing_once();
        let docs: Vec<Value> = read_ndjson(input)?;
        if docs.is_empty() {
            return Err(ConfigError::EmptyInput(input.to_path_buf()).into());
        }

        let flat = flatten_documents(&docs);
        if flat.pages == 0 {
            return Err(ConfigError::NoUserData(input.to_path_buf()).into());
        }
        tracing::info!(
            "Flattened {} users from {} ({} pages, {} skipped without data)",
            flat.records.len(), input.display(), flat.pages, flat.skipped
        );
        let records = flat.records;

        self.ensure_output_dir()?;
        let out = self.opts.output_path(OUTPUT_NAME_ACCOUNTS, "csv");
        write_accounts_csv(&out, &records)?;
        tracing::info!("Wrote {}", out.display());
        Ok(out)
    }

    // -------- Ranked-entity extractor --------

    /// Run both sources end to end. Inputs are validated before anything is read;
    /// the FB output is fully written before the citizen browser file is opened.
    pub fn extract_top_entities(&self, fb_top_ten_file: &Path, citizen_browser_file: &Path) -> Result<EntityOutputs> {
        init_tracing_once();
        ensure_flattened([fb_top_ten_file, citizen_browser_file], &self.opts.flattened_marker)?;
        self.ensure_output_dir()?;

        let fb_top_ten = self.extract_source_to_file(RankedSource::FbTopTen, fb_top_ten_file)?;
        let citizen_browser = self.extract_source_to_file(RankedSource::CitizenBrowser, citizen_browser_file)?;
        Ok(EntityOutputs { fb_top_ten, citizen_browser })
    }

    /// Read one source's tweets and build its month-keyed accumulator.
    pub fn extract_source(&self, source: RankedSource, input: &Path) -> Result<(MonthlyEntities, IngestStats)> {
        init_tracing_once();
        tracing::info!("Processing {} tweets from {}", source.handle(), input.display());
        let tweets: Vec<Tweet> = read_ndjson(input)?;

        let pb = maybe_count_progress(self.opts.progress, tweets.len() as u64, source.handle());
        let mut acc = MonthlyEntities::new();
        let mut stats = IngestStats::default();
        for t in &tweets {
            stats.record(acc.ingest(source, t));
            pb.inc(1);
        }
        pb.finish_and_clear();

        tracing::info!(
            "{}: {} tweets, {} ingested, {} skipped, {} bad timestamps, {} entities in {} months",
            source.handle(), stats.seen, stats.ingested, stats.skipped, stats.bad_timestamp,
            stats.entities, acc.len()
        );
        Ok((acc, stats))
    }

    fn extract_source_to_file(&self, source: RankedSource, input: &Path) -> Result<PathBuf> {
        let (acc, _) = self.extract_source(source, input)?;
        let out = self.opts.output_path(source.output_stem(), "json");
        acc.save_json(&out)?;
        tracing::info!("COMPLETE {}: wrote {}", source.handle(), out.display());
        Ok(out)
    }

    fn ensure_output_dir(&self) -> Result<()> {
        let dir = &self.opts.output_dir;
        fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))
    }
}
