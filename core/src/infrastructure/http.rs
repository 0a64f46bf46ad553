use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Extracts a human-readable message from a provider error body.
///
/// Understands `{"error": "..."}`, `{"error": {"message": "..."}}` and
/// `{"message": "..."}`; anything else falls back to the HTTP status.
pub fn provider_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| match value.get("error") {
            Some(Value::String(message)) => Some(message.clone()),
            Some(Value::Object(error)) => error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("server responded with status {status}"))
}

pub fn provider_error(status: u16, body: &str) -> CoreError {
    CoreError::ProviderUnavailable(provider_error_message(status, body))
}
