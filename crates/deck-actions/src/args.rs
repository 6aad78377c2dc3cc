//! Argument extraction helpers for JSON action arguments.

use serde_json::Value;

use crate::error::ActionError;

/// Get a string argument, failing when absent or not a string.
pub fn required_str<'a>(args: &'a Value, key: &'static str) -> Result<&'a str, ActionError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or(ActionError::MissingArgument(key))
}

/// Get an optional string argument.
pub fn optional_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(|v| v.as_str())
}

/// Get an optional boolean argument.
pub fn optional_bool(args: &Value, key: &str) -> Option<bool> {
    args.get(key).and_then(|v| v.as_bool())
}

/// Get an optional non-negative integer argument.
pub fn optional_u64(args: &Value, key: &str) -> Option<u64> {
    args.get(key).and_then(|v| v.as_u64())
}

/// Get a required non-negative integer argument (e.g. a tab index).
pub fn required_index(args: &Value, key: &'static str) -> Result<usize, ActionError> {
    match args.get(key) {
        Some(v) => v
            .as_u64()
            .map(|n| n as usize)
            .ok_or_else(|| ActionError::InvalidArgument {
                name: key,
                reason: format!("expected a non-negative integer, got {}", v),
            }),
        None => Err(ActionError::MissingArgument(key)),
    }
}
