//! Transport boundary: perform one GET or POST and hand back status and body.

pub mod ky_http;

pub use ky_http::{HttpOptions, HttpTransport};

use crate::core::error::RcError;
use reqwest::{Method, Url};
use std::future::Future;

/// Status code and untouched body bytes of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a request against a fully-formed URL. Requests never carry a body.
///
/// Implementations report network-level failures as [`RcError::Http`] and must
/// not treat non-2xx statuses as errors: the API describes failures in the body.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        method: Method,
        url: &Url,
    ) -> impl Future<Output = Result<RawResponse, RcError>> + Send;
}
