use crate::cli::commands::{open_worklog, state_for_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::{running_totals, summarize_month};
use crate::errors::AppResult;
use crate::models::WorkEntry;
use crate::ui::messages::{header, info};
use crate::utils::date::month_name;
use crate::utils::table::{Column, Table};
use crate::utils::{format_hours, format_money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let worklog = open_worklog(cfg)?;
        let wage = worklog.get_wage()?;

        if period.as_deref().is_some_and(|p| p.eq_ignore_ascii_case("all")) {
            let mut entries = worklog.list_entries()?;
            entries.sort_by(|a, b| a.date.cmp(&b.date));
            header("All entries");
            print_entries(&entries, wage, &cfg.currency);
            return Ok(());
        }

        let state = state_for_month(period.as_ref())?;
        let entries = worklog.month_entries(state.view_year, state.view_month)?;

        header(format!(
            "{} {}",
            month_name(state.view_month),
            state.view_year
        ));
        print_entries(&entries, wage, &cfg.currency);

        if !entries.is_empty() {
            let summary = summarize_month(&entries, state.view_year, state.view_month, wage);
            println!(
                "\nTotal: {} | Entries: {} | Earnings: {}",
                format_hours(summary.total_hours),
                summary.entry_count,
                format_money(summary.projected_earnings, &cfg.currency)
            );
        }
    }
    Ok(())
}

fn print_entries(entries: &[WorkEntry], wage: f64, currency: &str) {
    if entries.is_empty() {
        info("No entries found.");
        return;
    }

    let mut table = Table::new(vec![
        Column::text("Date", 10),
        Column::text("In", 5),
        Column::text("Out", 5),
        Column::number("Hours", 7),
        Column::number("Earnings", 11),
        Column::number("Running", 8),
    ]);

    for (entry, running) in entries.iter().zip(running_totals(entries)) {
        table.add_row(vec![
            entry.date.clone(),
            entry.start_time.clone(),
            entry.end_time.clone(),
            format_hours(entry.duration),
            format_money(entry.earnings(wage), currency),
            format_hours(running),
        ]);
    }

    print!("{}", table.render());
}
