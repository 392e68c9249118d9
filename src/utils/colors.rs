/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[36m";
pub const INVERSE: &str = "\x1b[7m";
pub const UNDERLINE: &str = "\x1b[4m";

/// Returns GREY when the value is zero and RESET otherwise.
pub fn color_for_hours(hours: f64) -> &'static str {
    if hours > 0.0 { RESET } else { GREY }
}
