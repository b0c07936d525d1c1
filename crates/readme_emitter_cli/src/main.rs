//! `readme-emitter` entry point.
//!
//! # Responsibility
//! - Write the embedded AI Toolkit README to its destination.
//! - Print one confirmation line on stdout; diagnostics go to stderr.
//!
//! # Exit status
//! - `0` after a successful write.
//! - `1` for configuration or filesystem errors.

mod config;

use config::RunConfig;
use log::debug;
use readme_emitter_core::{flush_logging, init_logging, Document, Emitter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // A broken log setup must not block the write.
    if let Err(err) = init_logging(config.log_level, config.log_dir.as_deref()) {
        eprintln!("warning: logging disabled: {err}");
    }
    debug!(
        "event=cli_start module=cli status=ok version={}",
        readme_emitter_core::core_version()
    );

    let result = Emitter::at_path(Document::readme(), &config.target, config.options)
        .and_then(|emitter| emitter.emit().map(|_| emitter));
    flush_logging();
    match result {
        Ok(emitter) => {
            println!("{} created successfully", emitter.target().file_name());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
