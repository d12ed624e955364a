//! Month-keyed accumulation of ranked entities, one accumulator per source account.
//! Buckets keep insertion order and duplicates; keys iterate chronologically.

use crate::date::YearMonth;
use crate::json_utils::id_string;
use crate::sources::RankedSource;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// The slice of a flattened tweet the extractor reads. Extra fields are ignored by serde.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub text: String,
    pub created_at: String,
    // String in v2 dumps, numeric in some older ones; only used for diagnostics.
    #[serde(default)]
    pub id: Option<Value>,
}

impl Tweet {
    pub fn id_display(&self) -> String {
        id_string(self.id.as_ref())
    }
}

/// What happened to a single tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Qualified; carries the number of entities appended (may be 0).
    Ingested(usize),
    /// Failed the source's inclusion predicate.
    Skipped,
    /// `created_at` could not be parsed; nothing appended.
    BadTimestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub seen: u64,
    pub ingested: u64,
    pub skipped: u64,
    pub bad_timestamp: u64,
    pub entities: u64,
}

impl IngestStats {
    pub fn record(&mut self, outcome: IngestOutcome) {
        self.seen += 1;
        match outcome {
            IngestOutcome::Ingested(n) => {
                self.ingested += 1;
                self.entities += n as u64;
            }
            IngestOutcome::Skipped => self.skipped += 1,
            IngestOutcome::BadTimestamp => self.bad_timestamp += 1,
        }
    }
}

/// `YYYY_MM` -> entities in tweet processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyEntities {
    buckets: BTreeMap<YearMonth, Vec<String>>,
}

impl MonthlyEntities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter, extract and bucket one tweet.
    pub fn ingest(&mut self, source: RankedSource, tweet: &Tweet) -> IngestOutcome {
        if !source.is_wanted(&tweet.text) {
            tracing::info!("Tweet skipped (id {}): {:?}", tweet.id_display(), tweet.text);
            return IngestOutcome::Skipped;
        }

        let key = match YearMonth::from_timestamp(&tweet.created_at) {
            Ok(k) => k,
            Err(e) => {
                tracing::warn!("Skipping tweet {}: {:#}", tweet.id_display(), e);
                return IngestOutcome::BadTimestamp;
            }
        };

        let entities = source.extract(&tweet.text);
        let n = entities.len();
        self.push_all(key, entities);
        IngestOutcome::Ingested(n)
    }

    /// Ingest tweets in order, tallying outcomes.
    pub fn ingest_all<'a, I>(&mut self, source: RankedSource, tweets: I) -> IngestStats
    where
        I: IntoIterator<Item = &'a Tweet>,
    {
        let mut stats = IngestStats::default();
        for t in tweets {
            stats.record(self.ingest(source, t));
        }
        stats
    }

    /// Append to the month bucket, creating it on first use.
    pub fn push_all(&mut self, key: YearMonth, entities: Vec<String>) {
        self.buckets.entry(key).or_default().extend(entities);
    }

    pub fn bucket(&self, key: &YearMonth) -> Option<&[String]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&YearMonth, &Vec<String>)> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total_entities(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> BTreeMap<YearMonth, Vec<String>> {
        self.buckets
    }

    /// Serialize as a single pretty JSON object `{"YYYY_MM": [..], ..}`.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let out = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut w = BufWriter::new(out);
        serde_json::to_writer_pretty(&mut w, self).with_context(|| format!("write {}", path.display()))?;
        w.write_all(b"\n")?;
        w.flush().with_context(|| format!("flush {}", path.display()))?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
        let me: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse {}", path.display()))?;
        Ok(me)
    }
}
