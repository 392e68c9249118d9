use crate::cli::commands::open_worklog;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::month_running_hours;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_date_strict;
use crate::utils::format_hours;
use crate::utils::time::parse_optional_time;
use chrono::Datelike;

/// Save or overwrite the entry for a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        dry_run,
    } = cmd
    {
        let d = parse_date_strict(date)?;
        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        let worklog = open_worklog(cfg)?;
        let entry = worklog.prepare_entry(d, start_parsed, end_parsed)?;

        if entry.duration == 0.0 {
            warning(format!(
                "End {} is not after start {}: duration recorded as 0.0h",
                entry.end_time, entry.start_time
            ));
        }

        if *dry_run {
            let running =
                month_running_hours(&worklog.list_entries()?, d.year(), d.month(), &entry);
            info(format!(
                "{}: {} → {} ({})",
                entry.date,
                entry.start_time,
                entry.end_time,
                format_hours(entry.duration)
            ));
            info(format!("Month running: {}", format_hours(running)));
            info("Dry run: nothing saved.");
            return Ok(());
        }

        worklog.save(&entry)?;
        success(format!(
            "Saved {}: {} → {} ({})",
            entry.date,
            entry.start_time,
            entry.end_time,
            format_hours(entry.duration)
        ));

        let summary = worklog.summarize_month(d.year(), d.month())?;
        info(format!(
            "Month total: {} over {} day(s)",
            format_hours(summary.total_hours),
            summary.entry_count
        ));
    }

    Ok(())
}
