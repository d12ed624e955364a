//! Flatten a twarc2 user lookup file into `account_data_clean_<YYYY-MM-DD>.csv`.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use twetl::{finish, init_tracing_once, TwitterETL};

/// This script cleans the account data output by twarc2. Specifically, it converts
/// the json data objects into a clean csv. Just provide the full path to the file
/// you'd like to clean.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Full path to the file that you want to clean
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing_once();
    finish(TwitterETL::new().clean_account_data(&args.file).map(|_| ()))
}
