//! tests/test_customers.rs
//!
//! Customer sign-up against an in-memory transport that records every request.

use reqwest::{Method, Url};
use resellerclub::api::CustomerCreateParams;
use resellerclub::core::error::RcError;
use resellerclub::loggers::Logger;
use resellerclub::retrieve::{RawResponse, Transport};
use resellerclub::{ClientConfig, ResellerClient};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Replies with a fixed status and body and keeps a log of what was asked.
#[derive(Clone)]
struct StaticTransport {
    status: u16,
    body: &'static str,
    seen: Arc<Mutex<Vec<(Method, Url)>>>,
}

impl StaticTransport {
    fn new(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn requests(&self) -> Vec<(Method, Url)> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for StaticTransport {
    fn execute(
        &self,
        method: Method,
        url: &Url,
    ) -> impl Future<Output = Result<RawResponse, RcError>> + Send {
        self.seen.lock().unwrap().push((method, url.clone()));
        let resp = RawResponse {
            status: self.status,
            body: self.body.as_bytes().to_vec(),
        };
        async move { Ok(resp) }
    }
}

fn client_with(transport: StaticTransport) -> ResellerClient<StaticTransport> {
    let config = ClientConfig::new("12345", "secret-key").with_test_mode(true);
    ResellerClient::with_transport(config, transport, Logger::detached("customers_test")).unwrap()
}

fn full_params() -> CustomerCreateParams {
    CustomerCreateParams {
        username: "jane@example.com".into(),
        password: "Secr3t!pass".into(),
        name: "Jane Doe".into(),
        company: "N/A".into(),
        address_line_1: "1 Main St".into(),
        city: "Springfield".into(),
        state: "Not Applicable".into(),
        other_state: "Nowhere".into(),
        country: "US".into(),
        zipcode: "12345".into(),
        phone_cc: "1".into(),
        phone: "5551234".into(),
        lang_pref: "en".into(),
        accept_policy: true,
        ..Default::default()
    }
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
}

#[tokio::test]
async fn test_create_customer_success() {
    let transport = StaticTransport::new(200, "1001");
    let client = client_with(transport.clone());

    let id = client.customers().create(&full_params()).await.unwrap();
    assert_eq!(id, 1001);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let (method, url) = &requests[0];
    assert_eq!(*method, Method::POST);
    assert_eq!(url.host_str(), Some("test.httpapi.com"));
    assert_eq!(url.path(), "/api/customers/v2/signup.json");
    assert_eq!(query_value(url, "auth-userid").as_deref(), Some("12345"));
    assert_eq!(query_value(url, "username").as_deref(), Some("jane@example.com"));
    assert_eq!(query_value(url, "passwd").as_deref(), Some("Secr3t!pass"));
    assert_eq!(query_value(url, "other-state").as_deref(), Some("Nowhere"));
    assert_eq!(query_value(url, "accept-policy").as_deref(), Some("true"));
    // unset optional flags and fields are not sent
    assert_eq!(query_value(url, "sms-consent"), None);
    assert_eq!(query_value(url, "address-line-2"), None);
}

#[tokio::test]
async fn test_create_customer_missing_username() {
    let transport = StaticTransport::new(200, "1001");
    let client = client_with(transport.clone());

    let params = CustomerCreateParams {
        username: String::new(),
        ..full_params()
    };
    let result = client.customers().create(&params).await;

    assert!(matches!(result, Err(RcError::MissingParams(p)) if p == "username"));
    assert!(transport.requests().is_empty(), "no request may be sent");
}

#[tokio::test]
async fn test_create_customer_reports_first_missing_field() {
    let params = CustomerCreateParams {
        city: String::new(),
        lang_pref: String::new(),
        ..full_params()
    };
    let err = params.to_query().unwrap_err();
    assert_eq!(err.to_string(), "missing required params: city");
}

#[tokio::test]
async fn test_create_customer_api_error() {
    let transport = StaticTransport::new(
        500,
        r#"{"status":"ERROR","message":"jane@example.com is already a customer"}"#,
    );
    let client = client_with(transport);

    let err = client.customers().create(&full_params()).await.unwrap_err();
    assert_eq!(err.message(), Some("jane@example.com is already a customer"));
    assert_eq!(err.response().unwrap()["status"], "ERROR");
}

#[tokio::test]
async fn test_create_customer_unexpected_body() {
    let transport = StaticTransport::new(200, r#"{"customerid":"1001"}"#);
    let client = client_with(transport);

    let err = client.customers().create(&full_params()).await.unwrap_err();
    assert!(err.is_something_went_wrong());
}

#[test]
fn test_client_rejects_empty_credentials() {
    let config = ClientConfig::new("", "secret-key");
    let result = ResellerClient::with_transport(
        config,
        StaticTransport::new(200, ""),
        Logger::detached("customers_test"),
    );
    assert!(matches!(result, Err(RcError::Config(_))));
}
