//! Interactive roster editor entry point.
//!
//! # Responsibility
//! - Bootstrap file logging and the JSON-backed store.
//! - Hand the loaded session to the menu shell.

mod prompt;
mod shell;

use anyhow::Result;
use roster_core::{default_log_level, init_logging, JsonFileStore, Roster, DATA_DIR};

fn main() -> Result<()> {
    if let Err(err) = bootstrap_logging() {
        eprintln!("Logging disabled: {err}");
    }

    let store = JsonFileStore::default_location();
    let roster = match Roster::open(store) {
        Ok(roster) => roster,
        Err(err) => {
            println!("Failed to read data from file: {err}");
            return Ok(());
        }
    };

    shell::run(roster)
}

/// Resolves `user_data/logs` against the working directory; file logging
/// requires an absolute path.
fn bootstrap_logging() -> Result<(), String> {
    let cwd = std::env::current_dir()
        .map_err(|err| format!("cannot resolve working directory: {err}"))?;
    let log_dir = cwd.join(DATA_DIR).join("logs");
    init_logging(default_log_level(), &log_dir.to_string_lossy())
}
