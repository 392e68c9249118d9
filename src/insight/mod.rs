//! Short natural-language feedback on recent work, from an external
//! text-generation service. Failures never reach the caller: a fixed fallback
//! string is returned instead.

pub mod gemini;

pub use gemini::GeminiClient;

use crate::errors::AppResult;
use crate::models::WorkEntry;
use tracing::warn;

pub const EMPTY_LOG_MESSAGE: &str = "Start logging your hours to get AI insights!";
pub const EMPTY_REPLY_MESSAGE: &str = "Keep up the great work!";
pub const FALLBACK_MESSAGE: &str = "Your work schedule looks solid. Stay focused!";

/// How many of the most recent entries are sent along with the prompt.
pub const RECENT_ENTRIES: usize = 7;

/// Anything that turns a prompt into text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> AppResult<String>;
}

pub struct InsightProvider<G> {
    generator: G,
}

impl<G: TextGenerator> InsightProvider<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Feedback on the latest entries. With no entries the service is not called.
    pub fn insight(&self, entries: &[WorkEntry]) -> String {
        if entries.is_empty() {
            return EMPTY_LOG_MESSAGE.to_string();
        }

        let prompt = build_prompt(&recent_entries(entries));
        match self.generator.generate(&prompt) {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY_MESSAGE.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "insight request failed, using fallback");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

/// Up to [`RECENT_ENTRIES`] entries with the latest dates, oldest first.
pub fn recent_entries(entries: &[WorkEntry]) -> Vec<WorkEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    let skip = sorted.len().saturating_sub(RECENT_ENTRIES);
    sorted.split_off(skip)
}

pub fn build_prompt(recent: &[WorkEntry]) -> String {
    let log = serde_json::to_string(recent).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Here is my recent work log (hours per day):\n{log}\n\n\
         Reply with two short sentences of feedback, under 200 characters in total. \
         Stay professional and encouraging, and comment on consistency and productivity."
    )
}
