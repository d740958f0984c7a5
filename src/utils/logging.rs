//! Log setup.
//!
//! The terminal belongs to the TUI, so records go to ~/.tubes/tubes.log.
//! Level comes from `TUBES_LOG` (env_logger filter syntax), default `info`.

use crate::constants::{LOG_ENV_VAR, LOG_FILE_NAME};
use crate::utils::persistence;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

/// Install the file logger. Returns the log path on success.
pub fn init() -> io::Result<PathBuf> {
    let path = persistence::save_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::new().filter_or(LOG_ENV_VAR, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;
    Ok(path)
}

/// Log to stderr instead of a file. Used by the headless simulator.
pub fn init_stderr(default_level: &str) {
    let _ = Builder::from_env(Env::new().filter_or(LOG_ENV_VAR, default_level))
        .target(Target::Stderr)
        .try_init();
}
