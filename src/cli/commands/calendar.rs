use crate::cli::commands::{open_worklog, state_for_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::calendar::into_weeks;
use crate::errors::AppResult;
use crate::models::CalendarCell;
use crate::utils::colors::{INVERSE, RESET, UNDERLINE};
use crate::utils::date::{month_name, parse_date_strict};
use chrono::Datelike;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        month,
        shift,
        select,
    } = cmd
    {
        let mut state = state_for_month(month.as_ref())?;
        if let Some(s) = select {
            let selected = parse_date_strict(s)?;
            state.select(selected);
            if month.is_none() {
                state.view(selected.year(), selected.month());
            }
        }
        state.navigate(*shift, 0);

        let worklog = open_worklog(cfg)?;
        let cells =
            worklog.build_month_grid(state.view_year, state.view_month, state.selected, state.today)?;

        println!("{} {}", month_name(state.view_month), state.view_year);
        println!(
            "{}",
            WEEKDAYS
                .iter()
                .map(|d| format!("{d:>4}"))
                .collect::<String>()
        );

        for week in into_weeks(&cells) {
            let line: String = week.iter().map(render_cell).collect();
            println!("{}", line.trim_end());
        }

        let logged = cells.iter().filter(|c| c.has_entry()).count();
        println!("\n* = logged   entries this month: {logged}");
    }

    Ok(())
}

/// Four columns per day: right-aligned number plus `*` when logged.
/// Selected days are shown inverted, today underlined.
fn render_cell(cell: &CalendarCell) -> String {
    match cell {
        CalendarCell::Empty => "    ".to_string(),
        CalendarCell::Day {
            date,
            is_selected,
            is_today,
            has_entry,
        } => {
            let marker = if *has_entry { '*' } else { ' ' };
            let text = format!("{:>3}{marker}", date.day());
            match (is_selected, is_today) {
                (true, _) => format!("{INVERSE}{text}{RESET}"),
                (false, true) => format!("{UNDERLINE}{text}{RESET}"),
                (false, false) => text,
            }
        }
    }
}
