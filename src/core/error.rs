//! # Core Error Module
//!
//! This module defines the central `RcError` type used throughout the library.
//! It leverages `thiserror` for error message formatting and `serde` for serialization,
//! so a failed call can be logged or persisted together with the raw API response.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Message carried by every failure the API did not describe itself.
pub const SOMETHING_WENT_WRONG: &str = "something went wrong";

/// Central error type for the `resellerclub` library.
#[derive(Debug, Error, Serialize)]
pub enum RcError {
    /// Error related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The transport did not complete the request (network, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// A required request parameter was left empty. Carries the parameter name.
    #[error("missing required params: {0}")]
    MissingParams(String),

    /// An availability check was issued without any TLD.
    #[error("No TLDs are selected")]
    NoTldsSelected,

    /// Failure reported by the API, or a payload that could not be understood.
    ///
    /// `message` is the API's own text when it supplied one, otherwise
    /// [`SOMETHING_WENT_WRONG`]. `response` is the decoded JSON value, or the
    /// raw body as a JSON string when it was not valid JSON.
    #[error("{message}")]
    Api {
        /// Human-readable error text.
        message: String,
        /// The raw response for programmatic inspection.
        response: Value,
    },
}

impl RcError {
    /// Builds an API error with the given message.
    pub fn api(message: impl Into<String>, response: Value) -> Self {
        RcError::Api {
            message: message.into(),
            response,
        }
    }

    /// Builds the generic "something went wrong" error around a raw response.
    pub fn something_went_wrong(response: impl Into<Value>) -> Self {
        RcError::Api {
            message: SOMETHING_WENT_WRONG.to_string(),
            response: response.into(),
        }
    }

    /// True for the generic failure, false for API-described ones.
    pub fn is_something_went_wrong(&self) -> bool {
        matches!(self, RcError::Api { message, .. } if message == SOMETHING_WENT_WRONG)
    }

    /// The API message, when this is an API-level error.
    pub fn message(&self) -> Option<&str> {
        match self {
            RcError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The raw response attached to an API-level error.
    pub fn response(&self) -> Option<&Value> {
        match self {
            RcError::Api { response, .. } => Some(response),
            _ => None,
        }
    }
}
