//! Order search (`/domains/search.json`).
//!
//! The response is an object whose numeric keys (`"1"`, `"2"`, ...) hold one
//! order each; the other keys (`recsonpage`, `recsindb`, ...) are metadata.

use super::Domains;
use crate::api::query::Query;
use crate::core::error::RcError;
use crate::core::flex::{FlexBool, FlexInt, FlexTime};
use crate::retrieve::Transport;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Search criteria. `no_of_records` and `page_no` are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainSearchParams {
    /// Orders per page, 10 to 500.
    pub no_of_records: u32,
    /// 1-based page number.
    pub page_no: u32,
    /// Sort keys such as `orderid` or `timestamp desc`.
    pub order_by: Vec<String>,
    pub order_ids: Vec<i64>,
    pub reseller_ids: Vec<i64>,
    pub customer_ids: Vec<i64>,
    /// Include sub-reseller orders.
    pub show_child_orders: bool,
    /// TLD product keys.
    pub product_keys: Vec<String>,
    /// InActive, Active, Suspended, Pending Delete Restorable, Deleted,
    /// Archived, Pending Verification or Failed Verification.
    pub statuses: Vec<String>,
    pub domain_name: String,
    /// `true`, `false` or `na`.
    pub privacy_enabled: String,
    pub creation_date_start: Option<DateTime<Utc>>,
    pub creation_date_end: Option<DateTime<Utc>>,
    pub expiry_date_start: Option<DateTime<Utc>>,
    pub expiry_date_end: Option<DateTime<Utc>>,
}

impl DomainSearchParams {
    pub fn new(no_of_records: u32, page_no: u32) -> Self {
        Self {
            no_of_records,
            page_no,
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> Result<Query, RcError> {
        if self.no_of_records == 0 {
            return Err(RcError::MissingParams("no-of-records".into()));
        }
        if self.page_no == 0 {
            return Err(RcError::MissingParams("page-no".into()));
        }

        let mut q = Query::new();
        q.set("no-of-records", self.no_of_records)
            .set("page-no", self.page_no)
            .add_all("order-by", &self.order_by)
            .add_all("order-id", &self.order_ids)
            .add_all("reseller-id", &self.reseller_ids)
            .add_all("customer-id", &self.customer_ids)
            .set_flag("show-child-orders", self.show_child_orders)
            .add_all("product-key", &self.product_keys)
            .add_all("status", &self.statuses)
            .set_non_empty("domain-name", &self.domain_name)
            .set_non_empty("privacy-enabled", &self.privacy_enabled);

        let dates = [
            ("creation-date-start", self.creation_date_start),
            ("creation-date-end", self.creation_date_end),
            ("expiry-date-start", self.expiry_date_start),
            ("expiry-date-end", self.expiry_date_end),
        ];
        for (key, date) in dates {
            if let Some(date) = date {
                q.set(key, date.timestamp());
            }
        }

        Ok(q)
    }
}

/// One order row of a search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainSearchItem {
    #[serde(rename = "orders.orderid")]
    pub order_id: FlexInt,
    #[serde(rename = "entity.customerid")]
    pub customer_id: FlexInt,
    #[serde(rename = "entity.entityid")]
    pub entity_id: FlexInt,
    #[serde(rename = "entity.entitytypeid")]
    pub entity_type_id: FlexInt,
    /// Domain name.
    #[serde(rename = "entity.description")]
    pub description: String,
    #[serde(rename = "entity.currentstatus")]
    pub current_status: String,
    /// Product key.
    #[serde(rename = "entitytype.entitytypekey")]
    pub entity_type_key: String,
    /// Product name.
    #[serde(rename = "entitytype.entitytypename")]
    pub entity_type_name: String,
    #[serde(rename = "orders.autorenew")]
    pub autorenew: FlexBool,
    #[serde(rename = "orders.resellerlock")]
    pub reseller_lock: FlexBool,
    #[serde(rename = "orders.customerlock")]
    pub customer_lock: FlexBool,
    #[serde(rename = "orders.transferlock")]
    pub transfer_lock: FlexBool,
    #[serde(rename = "orders.privacyprotection")]
    pub privacy_protection: FlexBool,
    /// Expiry at the registry.
    #[serde(rename = "orders.endtime")]
    pub end_time: FlexTime,
    /// Last modification.
    #[serde(rename = "orders.timestamp")]
    pub timestamp: FlexTime,
    /// Creation at the registry.
    #[serde(rename = "orders.creationtime")]
    pub creation_time: FlexTime,
    /// Addition to the system.
    #[serde(rename = "orders.creationdt")]
    pub creation_dt: FlexTime,
}

/// Reads a search response map, keeping only keys that start with a digit.
///
/// A row that does not decode fails the call with that row attached. No rows
/// at all is an error. Rows are sorted by description (the domain name).
pub fn parse_search(map: Map<String, Value>) -> Result<Vec<DomainSearchItem>, RcError> {
    let mut items = Vec::new();
    for (key, row) in &map {
        if !key.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        let item = DomainSearchItem::deserialize(row)
            .map_err(|_| RcError::something_went_wrong(row.clone()))?;
        items.push(item);
    }

    if items.is_empty() {
        return Err(RcError::something_went_wrong(Value::Object(map)));
    }

    items.sort_by(|a, b| a.description.cmp(&b.description));
    Ok(items)
}

impl<T: Transport> Domains<'_, T> {
    /// Lists registration orders matching `params`.
    ///
    /// <https://manage.resellerclub.com/kb/answer/771>
    pub async fn search(&self, params: &DomainSearchParams) -> Result<Vec<DomainSearchItem>, RcError> {
        let path = "/domains/search.json";
        let query = self.client.observe(path, params.to_query())?;

        let map = self.client.call_map(Method::GET, path, &query).await?;
        self.client.observe(path, parse_search(map))
    }
}
