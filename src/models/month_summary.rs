use serde::Serialize;

/// Totals for the entries of a single (year, month).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub total_hours: f64,
    pub entry_count: usize,
    pub projected_earnings: f64,
}

impl MonthSummary {
    /// Empty months divide by 1, so the average equals the (zero) total.
    pub fn average_earnings_per_day(&self) -> f64 {
        self.projected_earnings / self.entry_count.max(1) as f64
    }

    pub fn average_hours_per_day(&self) -> f64 {
        self.total_hours / self.entry_count.max(1) as f64
    }
}
