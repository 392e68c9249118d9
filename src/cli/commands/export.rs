use crate::cli::commands::open_worklog;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use tracing::debug;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let worklog = open_worklog(cfg)?;
        let written = ExportLogic::export(&worklog, *format, file, period.as_deref(), *force)?;
        debug!(written, format = format.as_str(), "export finished");
    }

    Ok(())
}
