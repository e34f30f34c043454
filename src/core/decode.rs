//! # Response Decoder
//!
//! Turns a raw response body into a typed result or an [`RcError`]. Three modes
//! match the three shapes the API answers with:
//!
//! * [`decode_object`] for endpoints returning a JSON object
//! * [`decode_int`] for endpoints returning a bare identifier
//! * [`decode_map`] for endpoints returning an object keyed by domain or row index
//!
//! Every failure path attaches the raw body (or the parsed object) to the error.
//! Nothing here logs; diagnostics belong to the caller.

use crate::core::error::RcError;
use crate::core::normalize::{ErrorEnvelope, check_response_error};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Eagerly classified response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// A bare JSON integer, e.g. a freshly created customer id.
    Scalar(i64),
    /// A JSON object: a success payload, a keyed map or an error envelope.
    Object(Map<String, Value>),
    /// Anything else. The API sends plain-text errors this way.
    Text(String),
}

impl Envelope {
    /// Classifies `body`.
    ///
    /// Empty bodies, bodies that are not UTF-8 and objects that are not valid
    /// JSON are rejected with the generic error carrying the body text.
    pub fn parse(body: &[u8]) -> Result<Self, RcError> {
        // the lossy text is only ever attached to the error, never parsed
        let Ok(text) = std::str::from_utf8(body) else {
            return Err(RcError::something_went_wrong(body_text(body)));
        };
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(RcError::something_went_wrong(text));
        }

        if trimmed.starts_with('{') {
            return serde_json::from_str::<Map<String, Value>>(trimmed)
                .map(Envelope::Object)
                .map_err(|_| RcError::something_went_wrong(text));
        }

        if let Ok(n) = serde_json::from_str::<i64>(trimmed) {
            return Ok(Envelope::Scalar(n));
        }

        Ok(Envelope::Text(trimmed.to_string()))
    }
}

/// Decodes a JSON object into `T`.
///
/// A body that does not start with `{` is itself the error message. When the
/// object parses but also signals an API error, the error wins.
pub fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, RcError> {
    match Envelope::parse(body)? {
        Envelope::Object(map) => {
            let value = Value::Object(map);
            let parsed = T::deserialize(&value);
            check_response_error(&value)?;
            parsed.map_err(|_| RcError::something_went_wrong(value))
        }
        Envelope::Scalar(_) | Envelope::Text(_) => {
            let text = body_text(body).trim().to_string();
            Err(RcError::api(text.clone(), Value::String(text)))
        }
    }
}

/// Decodes a bare JSON integer, falling back to error-envelope detection.
pub fn decode_int(body: &[u8]) -> Result<i64, RcError> {
    match Envelope::parse(body)? {
        Envelope::Scalar(n) => Ok(n),
        Envelope::Object(map) => {
            check_response_error(&Value::Object(map))?;
            Err(RcError::something_went_wrong(body_text(body)))
        }
        Envelope::Text(_) => Err(RcError::something_went_wrong(body_text(body))),
    }
}

/// Decodes a keyed map after checking the top level for an API error.
///
/// Entries are left untouched; callers pick the rows they understand.
pub fn decode_map(body: &[u8]) -> Result<Map<String, Value>, RcError> {
    match Envelope::parse(body)? {
        Envelope::Object(map) => {
            let envelope = ErrorEnvelope::from_map(&map);
            match envelope.failure() {
                Some(message) => Err(RcError::api(message, Value::Object(map))),
                None => Ok(map),
            }
        }
        Envelope::Scalar(_) | Envelope::Text(_) => {
            Err(RcError::something_went_wrong(body_text(body)))
        }
    }
}

fn body_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}
