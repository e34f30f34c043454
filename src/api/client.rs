//! # ResellerClub API Client
//!
//! Owns the credentials and the transport, builds authenticated URLs and routes
//! every response through the decoder. Endpoint groups ([`Customers`],
//! [`Domains`]) borrow the client and only assemble parameters.

use crate::api::customers::Customers;
use crate::api::domains::Domains;
use crate::api::query::Query;
use crate::configs::ClientConfig;
use crate::core::decode::{decode_int, decode_map, decode_object};
use crate::core::error::RcError;
use crate::loggers::Logger;
use crate::retrieve::{HttpOptions, HttpTransport, RawResponse, Transport};
use crate::{debug, error, info, warn};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Query parameters whose values never reach the logs.
const REDACTED_PARAMS: [&str; 2] = ["api-key", "passwd"];

/// Client for the reseller HTTP API.
///
/// Cloning is cheap; the config is shared and immutable.
#[derive(Clone)]
pub struct ResellerClient<T: Transport = HttpTransport> {
    /// Credentials and endpoint captured at construction.
    config: Arc<ClientConfig>,
    /// Performs the actual HTTP exchange.
    transport: T,
    /// Structured logger for request diagnostics.
    logger: Logger,
}

impl ResellerClient<HttpTransport> {
    /// Creates a client backed by [`HttpTransport`], using the config's timeout.
    ///
    /// # Errors
    /// Returns [`RcError::Config`] when credentials are empty, the endpoint is
    /// invalid or the HTTP client cannot be built.
    pub fn new(config: impl Into<Arc<ClientConfig>>, logger: Logger) -> Result<Self, RcError> {
        let config = config.into();
        let transport = HttpTransport::new_with_opts(Some(HttpOptions {
            timeout: config.timeout(),
            ..HttpOptions::default()
        }))?;
        Self::with_transport(config, transport, logger)
    }
}

impl<T: Transport> ResellerClient<T> {
    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(
        config: impl Into<Arc<ClientConfig>>,
        transport: T,
        logger: Logger,
    ) -> Result<Self, RcError> {
        let config = config.into();
        config.validate()?;
        Url::parse(config.endpoint())
            .map_err(|e| RcError::Config(format!("Invalid endpoint {}: {}", config.endpoint(), e)))?;

        Ok(Self {
            config,
            transport,
            logger,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn customers(&self) -> Customers<'_, T> {
        Customers::new(self)
    }

    pub fn domains(&self) -> Domains<'_, T> {
        Domains::new(self)
    }

    /// Builds `<endpoint><path>?auth-userid=..&api-key=..&<query>`.
    pub fn url(&self, path: &str, query: &Query) -> Result<Url, RcError> {
        let raw = format!("{}{}", self.config.endpoint().trim_end_matches('/'), path);
        let mut url =
            Url::parse(&raw).map_err(|e| RcError::Config(format!("Invalid URL {}: {}", raw, e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("auth-userid", &self.config.auth_userid);
            pairs.append_pair("api-key", &self.config.api_key);
            for (k, v) in query.pairs() {
                pairs.append_pair(k, v);
            }
        }

        Ok(url)
    }

    /// Sends the request and decodes a JSON object into `R`.
    pub async fn call_object<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
    ) -> Result<R, RcError> {
        let resp = self.send(method, path, query).await?;
        self.observe(path, decode_object(&resp.body))
    }

    /// Sends the request and decodes a bare integer (typically a new id).
    pub async fn call_int(&self, method: Method, path: &str, query: &Query) -> Result<i64, RcError> {
        let resp = self.send(method, path, query).await?;
        self.observe(path, decode_int(&resp.body))
    }

    /// Sends the request and decodes a keyed map. Top-level errors are already
    /// checked; rows are left for the endpoint to read.
    pub async fn call_map(
        &self,
        method: Method,
        path: &str,
        query: &Query,
    ) -> Result<Map<String, Value>, RcError> {
        let resp = self.send(method, path, query).await?;
        self.observe(path, decode_map(&resp.body))
    }

    /// Logs a decode or validation failure and passes the result through.
    pub(crate) fn observe<R>(&self, path: &str, result: Result<R, RcError>) -> Result<R, RcError> {
        if let Err(e) = &result {
            warn!(
                self.logger,
                "API call failed",
                "path" => path,
                "error" => e.to_string()
            );
        }
        result
    }

    async fn send(&self, method: Method, path: &str, query: &Query) -> Result<RawResponse, RcError> {
        let url = self.url(path, query)?;
        let shown = redacted(&url);

        info!(self.logger, "Request start", "method" => method.as_str(), "url" => &shown);

        let resp = match self.transport.execute(method, &url).await {
            Ok(resp) => resp,
            Err(e) => {
                error!(self.logger, "Transport failure", "url" => &shown, "error" => e.to_string());
                return Err(e);
            }
        };

        if !resp.is_success() {
            // The body still gets decoded: the API puts its error message there.
            warn!(self.logger, "Non-success HTTP status", "url" => &shown, "status" => resp.status);
        } else {
            debug!(self.logger, "Response received", "url" => &shown, "bytes" => resp.body.len());
        }

        Ok(resp)
    }
}

fn redacted(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if REDACTED_PARAMS.contains(&k.as_ref()) {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut shown = url.clone();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}
