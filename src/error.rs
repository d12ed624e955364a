use std::path::PathBuf;
use thiserror::Error;

/// User-facing configuration problems, raised before any record is processed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Input files must be 'flattened' .jsonl format. Offending path: {}", .0.display())]
    NotFlattened(PathBuf),

    #[error("no JSON documents found in {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("no user lookup page with a \"data\" array in {}", .0.display())]
    NoUserData(PathBuf),
}
