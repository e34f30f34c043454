//! Domain renewal (`/domains/renew.json`).

use super::{DomainActionResponse, Domains, InvoiceOption};
use crate::api::query::Query;
use crate::core::error::RcError;
use crate::retrieve::Transport;
use chrono::{DateTime, Utc};
use reqwest::Method;

/// Parameters for [`Domains::renew`].
#[derive(Debug, Clone, PartialEq)]
pub struct DomainRenewParams {
    pub order_id: i64,
    pub years: u32,
    /// Current expiry of the order, sent as epoch seconds.
    pub exp_date: DateTime<Utc>,
    /// Renew privacy protection as well.
    pub purchase_privacy: bool,
    pub auto_renew: bool,
    pub invoice_option: InvoiceOption,
    /// Only sent when positive.
    pub discount_amount: f64,
    pub purchase_premium_dns: bool,
}

impl DomainRenewParams {
    pub fn new(order_id: i64, years: u32, exp_date: DateTime<Utc>) -> Self {
        Self {
            order_id,
            years,
            exp_date,
            purchase_privacy: false,
            auto_renew: false,
            invoice_option: InvoiceOption::default(),
            discount_amount: 0.0,
            purchase_premium_dns: false,
        }
    }

    pub fn to_query(&self) -> Result<Query, RcError> {
        if self.order_id <= 0 {
            return Err(RcError::MissingParams("order-id".into()));
        }
        if self.years == 0 {
            return Err(RcError::MissingParams("years".into()));
        }

        let mut q = Query::new();
        q.set("order-id", self.order_id)
            .set("years", self.years)
            .set("exp-date", self.exp_date.timestamp())
            .set("auto-renew", self.auto_renew)
            .set("invoice-option", self.invoice_option)
            .set_flag("purchase-privacy", self.purchase_privacy)
            .set_flag("purchase-premium-dns", self.purchase_premium_dns);

        if self.discount_amount > 0.0 {
            q.set("discount-amount", self.discount_amount);
        }

        Ok(q)
    }
}

impl<T: Transport> Domains<'_, T> {
    /// Renews a domain registration order.
    ///
    /// <https://manage.resellerclub.com/kb/answer/746>
    pub async fn renew(&self, params: &DomainRenewParams) -> Result<DomainActionResponse, RcError> {
        let path = "/domains/renew.json";
        let query = self.client.observe(path, params.to_query())?;
        self.client.call_object(Method::POST, path, &query).await
    }
}
