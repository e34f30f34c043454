//! Order details (`/domains/details.json`).

use super::Domains;
use super::order::OrderContact;
use crate::api::query::Query;
use crate::core::error::RcError;
use crate::core::flex::{FlexBool, FlexFloat, FlexInt, FlexTime};
use crate::retrieve::Transport;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sections to include in [`Domains::get_order_details`]. `All` when none given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDetailsOption {
    All,
    OrderDetails,
    ContactIds,
    RegistrantContactDetails,
    AdminContactDetails,
    TechContactDetails,
    BillingContactDetails,
    NsDetails,
    DomainStatus,
    DnssecDetails,
    StatusDetails,
}

impl OrderDetailsOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDetailsOption::All => "All",
            OrderDetailsOption::OrderDetails => "OrderDetails",
            OrderDetailsOption::ContactIds => "ContactIds",
            OrderDetailsOption::RegistrantContactDetails => "RegistrantContactDetails",
            OrderDetailsOption::AdminContactDetails => "AdminContactDetails",
            OrderDetailsOption::TechContactDetails => "TechContactDetails",
            OrderDetailsOption::BillingContactDetails => "BillingContactDetails",
            OrderDetailsOption::NsDetails => "NsDetails",
            OrderDetailsOption::DomainStatus => "DomainStatus",
            OrderDetailsOption::DnssecDetails => "DNSSECDetails",
            OrderDetailsOption::StatusDetails => "StatusDetails",
        }
    }
}

impl fmt::Display for OrderDetailsOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GDPR protection state of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderGdpr {
    pub enabled: FlexBool,
    pub eligible: FlexBool,
}

/// Details of a domain registration order.
///
/// Fields missing from the response keep their zero value, so a partial
/// `options` selection still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainOrderDetails {
    #[serde(rename = "orderid")]
    pub order_id: FlexInt,
    pub description: String,
    #[serde(rename = "domainname")]
    pub domain_name: String,
    /// InActive, Active, Suspended, Pending Delete Restorable, Deleted or Archived.
    #[serde(rename = "currentstatus")]
    pub current_status: String,
    /// Registry locks: resellersuspend, resellerlock, transferlock.
    #[serde(rename = "orderstatus")]
    pub order_status: Vec<String>,
    /// System locks: sixtydaylock, renewhold.
    #[serde(rename = "domainstatus")]
    pub domain_status: Vec<String>,
    #[serde(rename = "productcategory")]
    pub product_category: String,
    #[serde(rename = "productkey")]
    pub product_key: String,
    #[serde(rename = "creationtime")]
    pub creation_time: FlexTime,
    #[serde(rename = "endtime")]
    pub end_time: FlexTime,
    /// Verified, Pending or Suspended.
    #[serde(rename = "raaVerificationStatus")]
    pub raa_verification_status: String,
    #[serde(rename = "isImmediateReseller")]
    pub is_immediate_reseller: FlexBool,
    #[serde(rename = "parentkey")]
    pub parent_key: String,
    #[serde(rename = "customerid")]
    pub customer_id: FlexInt,
    #[serde(rename = "noOfNameServers")]
    pub no_of_name_servers: FlexInt,
    pub ns1: String,
    pub ns2: String,
    #[serde(rename = "domsecret")]
    pub domain_secret: String,
    #[serde(rename = "isOrderSuspendedUponExpiry")]
    pub is_order_suspended_upon_expiry: FlexBool,
    #[serde(rename = "orderSuspendedByParent")]
    pub order_suspended_by_parent: FlexBool,
    #[serde(rename = "privacyprotectedallowed")]
    pub privacy_protected_allowed: FlexBool,
    #[serde(rename = "isprivacyprotected")]
    pub is_privacy_protected: FlexBool,
    #[serde(rename = "premiumdnsallowed")]
    pub premium_dns_allowed: FlexBool,
    #[serde(rename = "premiumdnsenabled")]
    pub premium_dns_enabled: FlexBool,
    #[serde(rename = "allowdeletion")]
    pub allow_deletion: FlexBool,
    #[serde(rename = "registrantcontactid")]
    pub registrant_contact_id: FlexInt,
    #[serde(rename = "registrantcontact")]
    pub registrant_contact: OrderContact,
    #[serde(rename = "admincontactid")]
    pub admin_contact_id: FlexInt,
    #[serde(rename = "admincontact")]
    pub admin_contact: OrderContact,
    #[serde(rename = "techcontactid")]
    pub tech_contact_id: FlexInt,
    #[serde(rename = "techcontact")]
    pub tech_contact: OrderContact,
    #[serde(rename = "billingcontactid")]
    pub billing_contact_id: FlexInt,
    #[serde(rename = "billingcontact")]
    pub billing_contact: OrderContact,
    /// Auto-renewal.
    pub recurring: FlexBool,
    /// DS records: keytag, algorithm, digesttype, digest.
    pub dnssec: Vec<String>,
    pub gdpr: OrderGdpr,
    pub paused: FlexBool,
    #[serde(rename = "tnc_required")]
    pub tnc_required: FlexBool,
    #[serde(rename = "actioncompleted")]
    pub action_completed: String,
    #[serde(rename = "entityid")]
    pub entity_id: FlexInt,
    #[serde(rename = "resellercost")]
    pub reseller_cost: FlexFloat,
    #[serde(rename = "customercost")]
    pub customer_cost: FlexFloat,
    #[serde(rename = "autoRenewAttemptDuration")]
    pub auto_renew_attempt_duration: FlexInt,
    #[serde(rename = "autoRenewTermType")]
    pub auto_renew_term_type: String,
    #[serde(rename = "serviceproviderid")]
    pub service_provider_id: FlexInt,
    #[serde(rename = "moneybackperiod")]
    pub money_back_period: FlexInt,
    #[serde(rename = "entitytypeid")]
    pub entity_type_id: FlexInt,
    #[serde(rename = "classname")]
    pub class_name: String,
    #[serde(rename = "classkey")]
    pub class_key: String,
    #[serde(rename = "eaqid")]
    pub eaq_id: FlexInt,
    #[serde(rename = "bulkwhoisoptout")]
    pub bulk_whois_opt_out: String,
    #[serde(rename = "multilingualflag")]
    pub multilingual_flag: String,
}

impl<T: Transport> Domains<'_, T> {
    /// Returns details of the order identified by `order_id`.
    ///
    /// <https://manage.resellerclub.com/kb/answer/770>
    pub async fn get_order_details(
        &self,
        order_id: i64,
        options: &[OrderDetailsOption],
    ) -> Result<DomainOrderDetails, RcError> {
        let mut query = Query::new();
        query.set("order-id", order_id);
        if options.is_empty() {
            query.add("options", OrderDetailsOption::All);
        } else {
            query.add_all("options", options);
        }

        self.client
            .call_object(Method::GET, "/domains/details.json", &query)
            .await
    }
}
