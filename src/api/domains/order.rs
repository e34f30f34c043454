//! Order-id lookup and the contact record shared by order responses.

use super::Domains;
use crate::api::query::Query;
use crate::core::error::RcError;
use crate::core::flex::FlexInt;
use crate::retrieve::Transport;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// A contact attached to an order (registrant, admin, tech or billing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderContact {
    #[serde(rename = "contactid")]
    pub contact_id: FlexInt,
    #[serde(rename = "customerid")]
    pub customer_id: FlexInt,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "contacttype")]
    pub contact_type: Vec<String>,
    #[serde(rename = "contactstatus")]
    pub contact_status: String,
    #[serde(rename = "parentkey")]
    pub parent_key: String,
    pub name: String,
    pub company: String,
    #[serde(rename = "emailaddr")]
    pub email_addr: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(rename = "telnocc")]
    pub tel_no_cc: String,
    #[serde(rename = "telno")]
    pub tel_no: String,
}

impl<T: Transport> Domains<'_, T> {
    /// Returns the order id of a registered domain name.
    ///
    /// <https://manage.resellerclub.com/kb/answer/763>
    pub async fn get_order_id(&self, domain_name: &str) -> Result<i64, RcError> {
        let path = "/domains/orderid.json";
        if domain_name.is_empty() {
            return self.client.observe(path, Err(RcError::MissingParams("domain-name".into())));
        }

        let mut query = Query::new();
        query.set("domain-name", domain_name);

        self.client.call_int(Method::GET, path, &query).await
    }
}
