//! src/retrieve/ky_http.rs
//!
//! reqwest-backed [`Transport`]: one attempt per call, single body read.
use crate::core::error::RcError;
use crate::retrieve::{RawResponse, Transport};
use reqwest::{Client, Method, Url};
use std::future::Future;
use std::time::Duration;

/// HttpOptions
///
/// Settings applied when building the underlying reqwest client.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Optional timeout for the underlying reqwest client.
    pub timeout: Option<Duration>,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: format!("resellerclub-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HttpTransport
///
/// Default transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    opts: HttpOptions,
}

impl HttpTransport {
    pub fn new() -> Result<Self, RcError> {
        Self::new_with_opts(None)
    }

    /// Builds the reqwest client from `opts`.
    ///
    /// # Errors
    /// Returns [`RcError::Config`] when the client cannot be built, e.g. a user
    /// agent that is not a valid header value.
    pub fn new_with_opts(opts: Option<HttpOptions>) -> Result<Self, RcError> {
        let opts = opts.unwrap_or_default();
        let mut builder = Client::builder().user_agent(opts.user_agent.clone());
        if let Some(timeout) = opts.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RcError::Config(format!("HTTP client build failed: {}", e)))?;

        Ok(Self { client, opts })
    }

    pub fn options(&self) -> &HttpOptions {
        &self.opts
    }
}

impl Transport for HttpTransport {
    fn execute(
        &self,
        method: Method,
        url: &Url,
    ) -> impl Future<Output = Result<RawResponse, RcError>> + Send {
        let request = self.client.request(method, url.clone());

        async move {
            let resp = request
                .send()
                .await
                .map_err(|e| RcError::Http(e.to_string()))?;

            let status = resp.status().as_u16();
            // Read body once; the decoder needs the raw bytes on every path
            let body = resp
                .bytes()
                .await
                .map_err(|e| RcError::Http(format!("Read Error: {}", e)))?;

            Ok(RawResponse {
                status,
                body: body.to_vec(),
            })
        }
    }
}
