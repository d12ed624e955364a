mod config;
mod date;
mod error;
mod util;
mod progress;
mod pipeline;

mod accounts;
mod aggregate;
mod sources;

mod json_utils;
mod ndjson;

pub use crate::config::{EtlOptions, ensure_flattened, FLATTENED_MARKER, OUTPUT_NAME_ACCOUNTS, OUTPUT_NAME_FB_TEN, OUTPUT_NAME_CITIZEN_BROWSER};
pub use crate::date::{YearMonth, parse_tweet_timestamp, today_stamp, date_stamp};
pub use crate::error::ConfigError;
pub use crate::pipeline::{TwitterETL, EntityOutputs};

// account flattening
pub use crate::accounts::{UserRecord, FlattenedPages, ACCOUNT_COLUMNS, flatten_users, flatten_documents, write_accounts_csv};

// ranked-entity extraction + monthly aggregation
pub use crate::sources::{
    RankedSource, FB_RANK_MARKERS, KEYCAP_MARKERS,
    is_fbtopten_tweet_i_want, get_fb_top_ten, is_citizenbrowser_tweet_i_want, get_citizenbrowser_top_five,
};
pub use crate::aggregate::{MonthlyEntities, Tweet, IngestOutcome, IngestStats};

// json/ndjson helpers
pub use crate::json_utils::{get_dict_val, get_dict_val_owned, value_to_cell};
pub use crate::ndjson::{NdjsonReader, read_ndjson};

// binaries share logging + exit handling
pub use crate::util::{init_tracing_once, exit_code_for, finish};
pub use crate::progress::make_count_progress;
