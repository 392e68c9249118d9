//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Two decimals with the configured currency symbol, e.g. `$150.00`.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}
