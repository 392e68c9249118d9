use crate::cli::commands::open_worklog;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_date_strict;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, yes } = cmd {
        let d = parse_date_strict(date)?;

        if !*yes && !ask_confirmation(&format!("Delete the entry for {d} permanently?")) {
            info("Operation cancelled.");
            return Ok(());
        }

        let worklog = open_worklog(cfg)?;
        let existed = worklog.entry(d)?.is_some();
        worklog.delete_entry(d)?;

        if existed {
            success(format!("Entry for {d} has been deleted."));
        } else {
            info(format!("No entry for {d}; nothing to delete."));
        }
    }

    Ok(())
}
