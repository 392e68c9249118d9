mod common;
use common::{entry, march_sample};
use std::cell::{Cell, RefCell};
use std::time::Duration;
use worklog::errors::{AppError, AppResult};
use worklog::insight::{
    EMPTY_LOG_MESSAGE, EMPTY_REPLY_MESSAGE, FALLBACK_MESSAGE, GeminiClient, InsightProvider,
    RECENT_ENTRIES, TextGenerator, build_prompt, recent_entries,
};

/// Canned generator that counts calls and remembers the last prompt.
struct Scripted {
    reply: fn() -> AppResult<String>,
    calls: Cell<usize>,
    last_prompt: RefCell<String>,
}

impl Scripted {
    fn new(reply: fn() -> AppResult<String>) -> Self {
        Self {
            reply,
            calls: Cell::new(0),
            last_prompt: RefCell::new(String::new()),
        }
    }
}

impl TextGenerator for &Scripted {
    fn generate(&self, prompt: &str) -> AppResult<String> {
        self.calls.set(self.calls.get() + 1);
        *self.last_prompt.borrow_mut() = prompt.to_string();
        (self.reply)()
    }
}

#[test]
fn test_reply_is_returned_trimmed() {
    let generator = Scripted::new(|| Ok("  Steady week. Nice balance.\n".to_string()));
    let provider = InsightProvider::new(&generator);

    assert_eq!(provider.insight(&march_sample()), "Steady week. Nice balance.");
    assert_eq!(generator.calls.get(), 1);
    assert!(generator.last_prompt.borrow().contains("2024-03-15"));
}

#[test]
fn test_empty_reply_uses_encouragement() {
    let generator = Scripted::new(|| Ok("   ".to_string()));
    let provider = InsightProvider::new(&generator);

    assert_eq!(provider.insight(&march_sample()), EMPTY_REPLY_MESSAGE);
}

#[test]
fn test_failure_uses_fallback() {
    let generator = Scripted::new(|| Err(AppError::ExternalService("boom".to_string())));
    let provider = InsightProvider::new(&generator);

    assert_eq!(provider.insight(&march_sample()), FALLBACK_MESSAGE);
    assert_eq!(generator.calls.get(), 1);
}

#[test]
fn test_no_entries_skips_the_service() {
    let generator = Scripted::new(|| Ok("should not be used".to_string()));
    let provider = InsightProvider::new(&generator);

    assert_eq!(provider.insight(&[]), EMPTY_LOG_MESSAGE);
    assert_eq!(generator.calls.get(), 0);
}

#[test]
fn test_recent_entries_keeps_latest_dates() {
    let entries: Vec<_> = (1..=10)
        .rev()
        .map(|day| entry(&format!("2024-05-{day:02}"), "09:00", "17:00", 8.0))
        .collect();

    let recent = recent_entries(&entries);
    assert_eq!(recent.len(), RECENT_ENTRIES);
    assert_eq!(recent.first().unwrap().date, "2024-05-04");
    assert_eq!(recent.last().unwrap().date, "2024-05-10");

    let prompt = build_prompt(&recent);
    assert!(prompt.contains("2024-05-10"));
    assert!(!prompt.contains("2024-05-03"));
}

#[test]
fn test_recent_entries_with_few_entries() {
    assert_eq!(recent_entries(&march_sample()).len(), 3);
}

#[test]
fn test_missing_api_key_falls_back() {
    let client = GeminiClient::new("http://127.0.0.1:9", "test-model", None, Duration::from_secs(1));

    assert!(matches!(
        client.generate("hello"),
        Err(AppError::ExternalService(_))
    ));
    assert_eq!(
        InsightProvider::new(client).insight(&march_sample()),
        FALLBACK_MESSAGE
    );
}

#[test]
fn test_unreachable_service_falls_back() {
    let client = GeminiClient::new(
        "http://127.0.0.1:9",
        "test-model",
        Some("dummy-key".to_string()),
        Duration::from_millis(500),
    );

    assert_eq!(
        InsightProvider::new(client).insight(&march_sample()),
        FALLBACK_MESSAGE
    );
}
