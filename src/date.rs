use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::OffsetDateTime;

/// Month bucket key rendered as "YYYY_MM". Ordered chronologically.
/// Serializes as its string form so it can key a JSON object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    pub year: u16,
    pub month: u8, // 1..=12
}

impl YearMonth {
    pub fn new(year: u16, month: u8) -> Self {
        assert!((1..=12).contains(&month), "Month must be 1..=12");
        Self { year, month }
    }

    /// Truncate a timestamp to its year and month, in the timestamp's own offset.
    pub fn from_datetime(dt: &OffsetDateTime) -> Self {
        let year = dt.year().clamp(0, u16::MAX as i32) as u16;
        Self { year, month: dt.month() as u8 }
    }

    /// Parse a tweet `created_at` and bucket it.
    pub fn from_timestamp(raw: &str) -> Result<Self> {
        parse_tweet_timestamp(raw).map(|dt| Self::from_datetime(&dt))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}_{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, m) = s.split_once('_').ok_or("expected YYYY_MM")?;
        let year: u16 = y.parse().map_err(|_| "invalid year")?;
        let month: u8 = m.parse().map_err(|_| "invalid month")?;
        if !(1..=12).contains(&month) {
            return Err("month must be 01..12".into());
        }
        Ok(Self { year, month })
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Timezone-aware parse of a tweet timestamp. Twitter v2 emits RFC 3339
/// (`2023-03-15T10:00:00.000Z`); other ISO 8601 shapes are accepted as a fallback.
pub fn parse_tweet_timestamp(raw: &str) -> Result<OffsetDateTime> {
    let s = raw.trim();
    OffsetDateTime::parse(s, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(s, &Iso8601::DEFAULT))
        .map_err(|e| anyhow!("unparseable created_at {:?}: {}", raw, e))
}

/// Today's date as "YYYY-MM-DD", local time when the offset is known, UTC otherwise.
pub fn today_stamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    date_stamp(&now)
}

pub fn date_stamp(dt: &OffsetDateTime) -> String {
    let fmt = format_description!("[year]-[month]-[day]");
    dt.format(&fmt)
        .unwrap_or_else(|_| format!("{:04}-{:02}-{:02}", dt.year(), dt.month() as u8, dt.day()))
}
