use crate::cli::commands::{open_worklog, state_for_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::cumulative_hours_before;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, color_for_hours};
use crate::utils::date::{first_of_month, month_name};
use crate::utils::{format_hours, format_money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let state = state_for_month(month.as_ref())?;
        let worklog = open_worklog(cfg)?;

        let summary = worklog.summarize_month(state.view_year, state.view_month)?;
        let wage = worklog.get_wage()?;
        let cur = &cfg.currency;

        header(format!(
            "{} {}",
            month_name(state.view_month),
            state.view_year
        ));

        let hours_color = color_for_hours(summary.total_hours);
        println!(
            "{CYAN}• Total hours:{RESET}        {hours_color}{}{RESET}",
            format_hours(summary.total_hours)
        );
        println!("{CYAN}• Entries:{RESET}            {}", summary.entry_count);
        println!("{CYAN}• Hourly wage:{RESET}        {}", format_money(wage, cur));
        println!(
            "{CYAN}• Projected earnings:{RESET} {}",
            format_money(summary.projected_earnings, cur)
        );
        println!(
            "{CYAN}• Avg earnings / day:{RESET} {}",
            format_money(summary.average_earnings_per_day(), cur)
        );
        println!(
            "{CYAN}• Avg hours / day:{RESET}    {}",
            format_hours(summary.average_hours_per_day())
        );

        if let Some(first) = first_of_month(state.view_year, state.view_month) {
            let before = cumulative_hours_before(&worklog.list_entries()?, first);
            println!(
                "{CYAN}• Logged before month:{RESET} {}",
                format_hours(before)
            );
        }
    }

    Ok(())
}
