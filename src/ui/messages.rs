//! User-facing terminal messages. Diagnostics go through `tracing` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Colors are dropped when `NO_COLOR` is set.
fn paint(color: &str, icon: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        icon.to_string()
    } else {
        format!("{color}{BOLD}{icon}{RESET}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(FG_BLUE, "ℹ️"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(FG_GREEN, "✅"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(FG_YELLOW, "⚠️"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", paint(FG_RED, "❌"), msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{} {}\n", paint(FG_BLUE, "=========="), msg);
}
