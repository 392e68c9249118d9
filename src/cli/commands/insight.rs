use crate::cli::commands::open_worklog;
use crate::config::Config;
use crate::errors::AppResult;
use crate::insight::{GeminiClient, InsightProvider};
use crate::ui::messages::{header, info};

/// Print feedback on the latest entries. Service failures fall back to a
/// fixed message and never fail the command.
pub fn handle(cfg: &Config) -> AppResult<()> {
    if !cfg.insight.enabled {
        info("Insights are disabled in the configuration.");
        return Ok(());
    }

    let worklog = open_worklog(cfg)?;
    let entries = worklog.list_entries()?;

    let provider = InsightProvider::new(GeminiClient::from_config(&cfg.insight));
    let text = provider.insight(&entries);

    header("Insight");
    println!("{}", textwrap::fill(&text, 72));
    Ok(())
}
