//! # Error Normalizer
//!
//! The API reports failures in three historical shapes:
//!
//! * `{"status": "ERROR", "message": "..."}`
//! * `{"errorvalue": {"error": "..."}}`
//! * a success payload that simply has no `status` field
//!
//! [`check_response_error`] folds all of them into a single [`RcError::Api`].

use crate::core::error::{RcError, SOMETHING_WENT_WRONG};
use serde_json::{Map, Value};

/// The error-bearing fields of a response object. Missing or non-string fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub status: String,
    pub message: String,
    pub error_value: String,
}

impl ErrorEnvelope {
    /// Extracts `status`, `message` and `errorvalue.error` from a JSON value.
    pub fn from_value(value: &Value) -> Self {
        value.as_object().map(Self::from_map).unwrap_or_default()
    }

    /// Same as [`ErrorEnvelope::from_value`] for an already unwrapped object.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let text = |v: Option<&Value>| v.and_then(Value::as_str).unwrap_or_default().to_string();

        Self {
            status: text(map.get("status")),
            message: text(map.get("message")),
            error_value: text(map.get("errorvalue").and_then(|ev| ev.get("error"))),
        }
    }

    /// Returns the error message when the envelope signals a failure.
    ///
    /// A non-empty `status` is always a failure: only `error` with a message keeps
    /// the API's text, anything else becomes [`SOMETHING_WENT_WRONG`].
    pub fn failure(&self) -> Option<&str> {
        if !self.status.is_empty() {
            if self.status.eq_ignore_ascii_case("error") && !self.message.is_empty() {
                return Some(&self.message);
            }
            return Some(SOMETHING_WENT_WRONG);
        }

        if !self.error_value.is_empty() {
            return Some(&self.error_value);
        }

        None
    }
}

/// Classifies a decoded response. `Ok(())` means success.
///
/// The returned error carries a copy of `value` as its raw response.
pub fn check_response_error(value: &Value) -> Result<(), RcError> {
    if !value.is_object() {
        return Ok(());
    }

    match ErrorEnvelope::from_value(value).failure() {
        Some(message) => Err(RcError::api(message, value.clone())),
        None => Ok(()),
    }
}
