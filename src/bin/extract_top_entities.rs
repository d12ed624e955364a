//! Extract ranked entities from @FacebooksTop10 and @citizenbrowser tweet dumps,
//! bucketed by month, into one JSON map per account.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use twetl::{finish, init_tracing_once, TwitterETL};

/// Extract top entities from @FacebooksTop10 and @citizenbrowser (Trending on Facebook)
/// tweets, grouped by the month each tweet was posted.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Full path to @FacebooksTop10 tweet data. Should be the flattened .jsonl file.
    #[arg(long, value_name = "FILE")]
    fb_top_ten_file: PathBuf,

    /// Full path to @citizenbrowser tweet data. Should be the flattened .jsonl file.
    #[arg(long, value_name = "FILE")]
    citizen_browser_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing_once();
    let res = TwitterETL::new()
        .extract_top_entities(&args.fb_top_ten_file, &args.citizen_browser_file)
        .map(|_| ());
    finish(res)
}
