//! # Domains
//!
//! Domain lifecycle endpoints: availability, registration, renewal and order
//! lookups. Each submodule adds its methods to [`Domains`].

pub mod availability;
pub mod details;
pub mod order;
pub mod register;
pub mod renew;
pub mod search;

pub use availability::DomainAvailability;
pub use details::{DomainOrderDetails, OrderDetailsOption, OrderGdpr};
pub use order::OrderContact;
pub use register::DomainRegisterParams;
pub use renew::DomainRenewParams;
pub use search::{DomainSearchItem, DomainSearchParams};

use crate::api::client::ResellerClient;
use crate::core::flex::{FlexFloat, FlexInt};
use crate::retrieve::Transport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Values of [`DomainAvailability::status`].
pub mod status {
    pub const AVAILABLE: &str = "available";
    pub const REGISTERED_THROUGH_US: &str = "regthroughus";
    pub const REGISTERED_THROUGH_OTHERS: &str = "regthroughothers";
    pub const UNKNOWN: &str = "unknown";
}

/// Endpoint group for `/domains`.
pub struct Domains<'a, T: Transport> {
    client: &'a ResellerClient<T>,
}

impl<'a, T: Transport> Domains<'a, T> {
    pub(crate) fn new(client: &'a ResellerClient<T>) -> Self {
        Self { client }
    }
}

/// How the customer invoice is handled for a register or renew action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvoiceOption {
    /// No invoice is raised; the order is executed.
    NoInvoice,
    /// Invoice is raised and paid from the customer's debit account when funds
    /// allow; otherwise the order stays pending.
    #[default]
    PayInvoice,
    /// Invoice is raised for later payment; the order is executed.
    KeepInvoice,
    /// Invoice is raised for later payment; the action stays pending.
    OnlyAdd,
}

impl InvoiceOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceOption::NoInvoice => "NoInvoice",
            InvoiceOption::PayInvoice => "PayInvoice",
            InvoiceOption::KeepInvoice => "KeepInvoice",
            InvoiceOption::OnlyAdd => "OnlyAdd",
        }
    }
}

impl fmt::Display for InvoiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an order action (registration, renewal, privacy purchase).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainAction {
    #[serde(rename = "actiontype")]
    pub action_type: String,
    #[serde(rename = "actiontypedesc")]
    pub action_type_desc: String,
    #[serde(rename = "actionstatus")]
    pub action_status: String,
    #[serde(rename = "actionstatusdesc")]
    pub action_status_desc: String,
    pub description: String,
    #[serde(rename = "entityid")]
    pub entity_id: FlexInt,
    #[serde(rename = "customerid")]
    pub customer_id: FlexInt,
    #[serde(rename = "eaqid")]
    pub eaq_id: FlexInt,
    #[serde(rename = "invoiceid")]
    pub invoice_id: FlexInt,
    #[serde(rename = "sellingamount")]
    pub selling_amount: FlexFloat,
    #[serde(rename = "unutilisedsellingamount")]
    pub unutilised_selling_amount: FlexFloat,
    #[serde(rename = "sellingcurrencysymbol")]
    pub selling_currency_symbol: String,
}

/// Response of register and renew: the domain action plus the privacy
/// protection action, when one was purchased.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainActionResponse {
    #[serde(flatten)]
    pub action: DomainAction,
    #[serde(rename = "privacydetails")]
    pub privacy_details: DomainAction,
}
