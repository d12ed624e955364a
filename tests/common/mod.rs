#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fixed date stamp so output names are deterministic.
pub const STAMP: &str = "2023-04-01";

/// Fresh scratch directory that outlives the test (mirrors the corpus helpers).
pub fn scratch_dir() -> PathBuf {
    tempfile::tempdir().unwrap().into_path()
}

/// Write one JSON value per line.
pub fn write_ndjson(path: &Path, lines: &[Value]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = File::create(path).unwrap();
    for l in lines {
        writeln!(&mut f, "{}", l).unwrap();
    }
}

pub fn tweet(id: &str, created_at: &str, text: &str) -> Value {
    json!({ "id": id, "created_at": created_at, "text": text, "author_id": "42", "lang": "en" })
}

/// A twarc2 user lookup page with:
/// - "alice": every field present, verified
/// - "bob": no `location`, no `pinned_tweet_id`, no `url`
/// - "carol": no `public_metrics` at all
pub fn user_lookup_page() -> Value {
    json!({
        "data": [
            {
                "username": "alice", "verified": true, "name": "Alice A", "id": "1001",
                "description": "hello, \"world\"", "created_at": "2010-01-02T03:04:05.000Z",
                "location": "Bloomington, IN",
                "public_metrics": { "followers_count": 10, "following_count": 20, "tweet_count": 30, "listed_count": 4 },
                "pinned_tweet_id": "555", "profile_image_url": "https://img/alice.png",
                "url": "https://alice.example", "protected": false
            },
            {
                "username": "bob", "verified": false, "name": "Bob B", "id": "1002",
                "description": "", "created_at": "2011-05-06T07:08:09.000Z",
                "public_metrics": { "followers_count": 1, "following_count": 2, "tweet_count": 3, "listed_count": 0 },
                "profile_image_url": "https://img/bob.png", "protected": true
            },
            {
                "username": "carol", "verified": false, "name": "Carol C", "id": "1003",
                "created_at": "2012-01-01T00:00:00.000Z", "protected": false
            }
        ],
        "__twarc": { "url": "https://api.twitter.com/2/users", "version": "2.10.4" }
    })
}

/// Tiny @FacebooksTop10 dump: two ranked posts in March 2023, one in April,
/// one unrelated post (skipped by the predicate).
pub fn fb_top_ten_tweets() -> Vec<Value> {
    vec![
        tweet("f1", "2023-03-02T12:00:00.000Z", "Top pages today\n1. Apple\n2. Google\nsome noise\n3. Meta"),
        tweet("f2", "2023-03-20T12:00:00.000Z", "1. Acme\n10. Zed"),
        tweet("f3", "2023-03-25T12:00:00.000Z", "No ranks here"),
        tweet("f4", "2023-04-01T00:30:00.000Z", "1. Apple"),
    ]
}

/// Tiny @citizenbrowser dump: one full ranking, one post with a bare rank,
/// one post with plain digits only (skipped).
pub fn citizen_browser_tweets() -> Vec<Value> {
    vec![
        tweet(
            "c1",
            "2023-03-15T10:00:00Z",
            "Trending on Facebook\n1\u{FE0F}\u{20E3} https://x.com/a label\n2\u{FE0F}\u{20E3} https://x.com/b",
        ),
        tweet("c2", "2023-03-16T10:00:00Z", "2\u{FE0F}\u{20E3}\n3\u{FE0F}\u{20E3} https://x.com/c"),
        tweet("c3", "2023-03-17T10:00:00Z", "Top 1 2 3 4 5 of the week"),
        tweet("c4", "2023-05-01T10:00:00Z", "5\u{FE0F}\u{20E3} https://x.com/e"),
    ]
}
