use crate::cli::commands::open_worklog;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::format_money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Wage { set } = cmd {
        let worklog = open_worklog(cfg)?;

        match set {
            Some(wage) => {
                worklog.set_wage(*wage)?;
                success(format!(
                    "Hourly wage set to {}",
                    format_money(*wage, &cfg.currency)
                ));
            }
            None => {
                let wage = worklog.get_wage()?;
                info(format!("Hourly wage: {}", format_money(wage, &cfg.currency)));
            }
        }
    }

    Ok(())
}
