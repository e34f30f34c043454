//! Domain registration (`/domains/register.json`).

use super::{DomainActionResponse, Domains, InvoiceOption};
use crate::api::query::Query;
use crate::core::error::RcError;
use crate::retrieve::Transport;
use reqwest::Method;
use std::collections::BTreeMap;

/// Parameters for [`Domains::register`].
///
/// Contact ids of `-1` are accepted where the registry needs no such contact
/// (admin for .EU/.NZ/.RU/.UK, tech and billing for a few more).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainRegisterParams {
    pub domain_name: String,
    pub years: u32,
    /// Name servers.
    pub ns: Vec<String>,
    pub customer_id: i64,
    pub reg_contact_id: i64,
    pub admin_contact_id: i64,
    pub tech_contact_id: i64,
    pub billing_contact_id: i64,
    pub invoice_option: InvoiceOption,
    /// Buy privacy protection. Not offered for every TLD.
    pub purchase_privacy: bool,
    /// Turn privacy protection on.
    pub protect_privacy: bool,
    pub auto_renew: bool,
    /// TLD-specific `attr-name`/`attr-value` pairs, sent in key order.
    pub extra_attrs: BTreeMap<String, String>,
    /// Only sent when positive.
    pub discount_amount: f64,
    pub purchase_premium_dns: bool,
}

impl DomainRegisterParams {
    pub fn to_query(&self) -> Result<Query, RcError> {
        if self.domain_name.is_empty() {
            return Err(RcError::MissingParams("domain-name".into()));
        }
        if self.years == 0 {
            return Err(RcError::MissingParams("years".into()));
        }
        if self.ns.is_empty() {
            return Err(RcError::MissingParams("ns".into()));
        }

        let mut q = Query::new();
        q.set("domain-name", &self.domain_name)
            .set("years", self.years)
            .add_all("ns", &self.ns)
            .set("customer-id", self.customer_id)
            .set("reg-contact-id", self.reg_contact_id)
            .set("admin-contact-id", self.admin_contact_id)
            .set("tech-contact-id", self.tech_contact_id)
            .set("billing-contact-id", self.billing_contact_id)
            .set("invoice-option", self.invoice_option)
            .set("auto-renew", self.auto_renew)
            .set_flag("purchase-privacy", self.purchase_privacy)
            .set_flag("protect-privacy", self.protect_privacy)
            .set_flag("purchase-premium-dns", self.purchase_premium_dns);

        if self.discount_amount > 0.0 {
            q.set("discount-amount", self.discount_amount);
        }

        for (i, (name, value)) in self.extra_attrs.iter().enumerate() {
            q.set(&format!("attr-name{}", i + 1), name)
                .set(&format!("attr-value{}", i + 1), value);
        }

        Ok(q)
    }
}

impl<T: Transport> Domains<'_, T> {
    /// Registers a domain name.
    ///
    /// <https://manage.resellerclub.com/kb/answer/752>
    pub async fn register(&self, params: &DomainRegisterParams) -> Result<DomainActionResponse, RcError> {
        let path = "/domains/register.json";
        let query = self.client.observe(path, params.to_query())?;
        self.client.call_object(Method::POST, path, &query).await
    }
}
