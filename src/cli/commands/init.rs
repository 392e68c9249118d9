use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the selected store (SQLite schema, or the local store directory)
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing worklog…");

    if !cli.test {
        cfg.save()?;
    }

    store::open(cfg)?;
    success(format!(
        "Store ready ({:?}): {}",
        cfg.backend,
        cfg.storage_location().display()
    ));

    Ok(())
}
