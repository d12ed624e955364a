use crate::error::ConfigError;
use std::process::ExitCode;

static INIT_ONCE: std::sync::Once = std::sync::Once::new();
pub fn init_tracing_once() {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Exit status for a failed run: 2 for configuration errors (same as clap usage errors),
/// 1 for everything else (I/O, corrupt input).
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() { 2 } else { 1 }
}

/// Report a run result from a binary's `main`.
pub fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => {
            tracing::info!("--- script complete ---");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Printed even when RUST_LOG silences tracing.
            eprintln!("error: {:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}
