//! Flatten twarc2 user lookups (`{"data": [user, ..]}`) into fixed-column CSV rows.

use crate::json_utils::{get_dict_val_owned, value_to_cell};
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::Path;

/// Output columns, in order. The CSV also carries a leading unnamed index column.
pub const ACCOUNT_COLUMNS: [&str; 15] = [
    "username",
    "verified",
    "name",
    "account_id",
    "description",
    "created_at",
    "location",
    "followers_count",
    "following_count",
    "tweet_count",
    "listed_count",
    "pinned_tweet_id",
    "profile_image_url",
    "url",
    "protected",
];

/// One flattened user. Any field absent from the source object is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRecord {
    pub username: Option<Value>,
    pub verified: Option<Value>,
    pub name: Option<Value>,
    pub account_id: Option<Value>,
    pub description: Option<Value>,
    pub created_at: Option<Value>,
    pub location: Option<Value>,
    pub followers_count: Option<Value>,
    pub following_count: Option<Value>,
    pub tweet_count: Option<Value>,
    pub listed_count: Option<Value>,
    pub pinned_tweet_id: Option<Value>,
    pub profile_image_url: Option<Value>,
    pub url: Option<Value>,
    pub protected: Option<Value>,
}

impl UserRecord {
    pub fn from_user(user: &Value) -> Self {
        let top = |k: &str| get_dict_val_owned(user, &[k]);
        let metric = |k: &str| get_dict_val_owned(user, &["public_metrics", k]);
        Self {
            username: top("username"),
            verified: top("verified"),
            name: top("name"),
            account_id: top("id"),
            description: top("description"),
            created_at: top("created_at"),
            location: top("location"),
            followers_count: metric("followers_count"),
            following_count: metric("following_count"),
            tweet_count: metric("tweet_count"),
            listed_count: metric("listed_count"),
            pinned_tweet_id: top("pinned_tweet_id"),
            profile_image_url: top("profile_image_url"),
            url: top("url"),
            protected: top("protected"),
        }
    }

    /// Values in `ACCOUNT_COLUMNS` order.
    pub fn values(&self) -> [Option<&Value>; 15] {
        [
            self.username.as_ref(),
            self.verified.as_ref(),
            self.name.as_ref(),
            self.account_id.as_ref(),
            self.description.as_ref(),
            self.created_at.as_ref(),
            self.location.as_ref(),
            self.followers_count.as_ref(),
            self.following_count.as_ref(),
            self.tweet_count.as_ref(),
            self.listed_count.as_ref(),
            self.pinned_tweet_id.as_ref(),
            self.profile_image_url.as_ref(),
            self.url.as_ref(),
            self.protected.as_ref(),
        ]
    }
}

/// One record per entry of `doc["data"]`, input order preserved.
/// Errors if the document has no `data` array (e.g. an errors-only lookup page).
pub fn flatten_users(doc: &Value) -> Result<Vec<UserRecord>> {
    let users = doc
        .get("data")
        .ok_or_else(|| anyhow!("document has no \"data\" field"))?
        .as_array()
        .ok_or_else(|| anyhow!("\"data\" is not an array"))?;
    Ok(users.iter().map(UserRecord::from_user).collect())
}

/// Users from several lookup pages, plus how many pages contributed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedPages {
    pub records: Vec<UserRecord>,
    /// Pages that carried a `data` array (possibly empty).
    pub pages: usize,
    /// Pages without one; skipped with a warning.
    pub skipped: usize,
}

/// Flatten several lookup pages, concatenated in document order.
/// A page without a `data` array is logged and skipped; the caller decides
/// what to do when no page had one.
pub fn flatten_documents(docs: &[Value]) -> FlattenedPages {
    let mut out = FlattenedPages::default();
    for (i, doc) in docs.iter().enumerate() {
        match flatten_users(doc) {
            Ok(mut recs) => {
                out.records.append(&mut recs);
                out.pages += 1;
            }
            Err(e) => {
                let errors = doc.get("errors").and_then(Value::as_array).map_or(0, Vec::len);
                tracing::warn!("Skipping document #{}: {} ({} API errors reported)", i + 1, e, errors);
                out.skipped += 1;
            }
        }
    }
    out
}

/// Write records as CSV with a leading 0-based index column (empty header cell).
pub fn write_accounts_csv(path: &Path, records: &[UserRecord]) -> Result<()> {
    let mut w = csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;

    let mut header = Vec::with_capacity(ACCOUNT_COLUMNS.len() + 1);
    header.push("");
    header.extend(ACCOUNT_COLUMNS);
    w.write_record(&header)?;

    for (idx, rec) in records.iter().enumerate() {
        let mut row = Vec::with_capacity(ACCOUNT_COLUMNS.len() + 1);
        row.push(idx.to_string());
        row.extend(rec.values().into_iter().map(value_to_cell));
        w.write_record(&row)?;
    }
    w.flush().with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
