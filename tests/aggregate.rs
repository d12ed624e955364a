#[path = "common/mod.rs"]
mod common;

use common::*;
use twetl::{IngestOutcome, MonthlyEntities, RankedSource, Tweet, YearMonth};

fn to_tweets(values: Vec<serde_json::Value>) -> Vec<Tweet> {
    values.into_iter().map(|v| serde_json::from_value(v).unwrap()).collect()
}

/// A keycap tweet from 2023-03-15 lands in the "2023_03" bucket with its
/// second-token entity.
#[test]
fn keycap_tweet_lands_in_its_month() {
    let t: Tweet = serde_json::from_value(tweet("x1", "2023-03-15T10:00:00Z", "1\u{FE0F}\u{20E3} https://x.com label")).unwrap();
    let mut acc = MonthlyEntities::new();
    assert_eq!(acc.ingest(RankedSource::CitizenBrowser, &t), IngestOutcome::Ingested(1));
    assert_eq!(acc.bucket(&YearMonth::new(2023, 3)), Some(&["https://x.com".to_string()][..]));
    assert_eq!(acc.len(), 1);
}

/// FB dump: March collects from f1 then f2 (duplicates kept, order preserved),
/// April gets f4, f3 is skipped by the predicate.
#[test]
fn fb_top_ten_buckets_in_processing_order() {
    let tweets = to_tweets(fb_top_ten_tweets());
    let mut acc = MonthlyEntities::new();
    let stats = acc.ingest_all(RankedSource::FbTopTen, &tweets);

    assert_eq!(stats.seen, 4);
    assert_eq!(stats.ingested, 3);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.entities, 6);

    let march: Vec<&str> = acc.bucket(&YearMonth::new(2023, 3)).unwrap().iter().map(String::as_str).collect();
    assert_eq!(march, vec!["Apple", "Google", "Meta", "Acme", "Zed"]);
    let april: Vec<&str> = acc.bucket(&YearMonth::new(2023, 4)).unwrap().iter().map(String::as_str).collect();
    assert_eq!(april, vec!["Apple"]);
    assert_eq!(acc.total_entities(), 6);
}

/// A bare keycap rank contributes nothing for that line, and later tweets still count.
#[test]
fn bare_rank_does_not_stop_processing() {
    let tweets = to_tweets(citizen_browser_tweets());
    let mut acc = MonthlyEntities::new();
    let stats = acc.ingest_all(RankedSource::CitizenBrowser, &tweets);

    assert_eq!(stats.ingested, 3);
    assert_eq!(stats.skipped, 1);
    let march = acc.bucket(&YearMonth::new(2023, 3)).unwrap();
    assert_eq!(march, &["https://x.com/a", "https://x.com/b", "https://x.com/c"]);
    assert_eq!(acc.bucket(&YearMonth::new(2023, 5)).unwrap(), &["https://x.com/e"]);
}

/// The bucket follows the timestamp's own offset, and an unparseable timestamp
/// skips the tweet without aborting.
#[test]
fn timestamp_offset_and_bad_timestamps() {
    let mut acc = MonthlyEntities::new();
    let late: Tweet = serde_json::from_value(tweet("t1", "2023-03-31T23:30:00-05:00", "1. Late")).unwrap();
    let bad: Tweet = serde_json::from_value(tweet("t2", "yesterday", "1. Lost")).unwrap();

    assert_eq!(acc.ingest(RankedSource::FbTopTen, &late), IngestOutcome::Ingested(1));
    assert_eq!(acc.ingest(RankedSource::FbTopTen, &bad), IngestOutcome::BadTimestamp);
    assert_eq!(acc.bucket(&YearMonth::new(2023, 3)).unwrap(), &["Late"]);
    assert_eq!(acc.total_entities(), 1);
}

/// JSON save/load keeps the key set and per-key order; keys are "YYYY_MM" strings.
#[test]
fn json_round_trip_preserves_keys_and_order() {
    let dir = scratch_dir();
    let path = dir.join("acc.json");

    let mut acc = MonthlyEntities::new();
    acc.push_all(YearMonth::new(2023, 4), vec!["b".into(), "a".into(), "b".into()]);
    acc.push_all(YearMonth::new(2022, 12), vec!["z".into()]);
    acc.save_json(&path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let keys: Vec<&String> = raw.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["2022_12", "2023_04"]);

    let back = MonthlyEntities::load_json(&path).unwrap();
    assert_eq!(back, acc);
    assert_eq!(back.bucket(&YearMonth::new(2023, 4)).unwrap(), &["b", "a", "b"]);
}

/// Month keys render and parse as "YYYY_MM".
#[test]
fn year_month_key_format() {
    let ym = YearMonth::from_timestamp("2023-03-15T10:00:00.000Z").unwrap();
    assert_eq!(ym.to_string(), "2023_03");
    assert_eq!("2023_03".parse::<YearMonth>().unwrap(), ym);
    assert!("2023-03".parse::<YearMonth>().is_err());
    assert!("2023_13".parse::<YearMonth>().is_err());
}
