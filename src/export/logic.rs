use crate::core::Worklog;
use crate::core::calculator::aggregate::entries_for_month;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::store::EntryStore;
use crate::ui::messages::warning;
use crate::utils::date::parse_month;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write entries (ascending by date) with their earnings at the current wage.
    ///
    /// `period` is `None`, `"all"` or a `YYYY-MM` month.
    pub fn export<S: EntryStore>(
        worklog: &Worklog<S>,
        format: ExportFormat,
        file: &str,
        period: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let mut entries = match period {
            None => worklog.list_entries()?,
            Some(p) if p.eq_ignore_ascii_case("all") => worklog.list_entries()?,
            Some(p) => {
                let (year, month) = parse_month(p)?;
                entries_for_month(&worklog.list_entries()?, year, month)
            }
        };
        entries.sort_by(|a, b| a.date.cmp(&b.date));

        if entries.is_empty() {
            warning("No entries found for the selected period.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let wage = worklog.get_wage()?;
        let rows: Vec<EntryExport> = entries
            .iter()
            .map(|e| EntryExport::from_entry(e, wage))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
