//! Validation for the voice assistant section.

use crate::schema::VigilConfig;

use super::helpers::{validate_not_empty, validate_range};

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &VigilConfig) {
    let a = &config.assistant;
    validate_range(
        errors,
        "assistant.capture_window_ms",
        a.capture_window_ms,
        1000,
        60_000,
    );
    validate_range(errors, "assistant.reply_delay_ms", a.reply_delay_ms, 0, 10_000);
    validate_range(
        errors,
        "assistant.retry_backoff_ms",
        a.retry_backoff_ms,
        0,
        10_000,
    );
    validate_not_empty(errors, "assistant.system_prompt", &a.system_prompt);
    validate_not_empty(errors, "assistant.clip_filename", &a.clip_filename);
}
