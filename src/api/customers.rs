//! # Customers
//!
//! Customer account management. Only sign-up is exposed.

use crate::api::client::ResellerClient;
use crate::api::query::Query;
use crate::core::error::RcError;
use crate::retrieve::Transport;
use reqwest::Method;

/// Endpoint group for `/customers`.
pub struct Customers<'a, T: Transport> {
    client: &'a ResellerClient<T>,
}

/// Parameters for [`Customers::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerCreateParams {
    /// Required. Login name, must be an email address.
    pub username: String,
    /// Required. 9 to 16 characters with at least one lowercase, one uppercase,
    /// one digit and one of `~*!@$#%_+.?:,{}`.
    pub password: String,
    /// Required.
    pub name: String,
    /// Required.
    pub company: String,
    /// Required.
    pub address_line_1: String,
    /// Required.
    pub city: String,
    /// Required. Pass `Not Applicable` when there is no state and fill `other_state`.
    pub state: String,
    pub other_state: String,
    /// Required. ISO 3166-1 alpha-2.
    pub country: String,
    /// Required.
    pub zipcode: String,
    /// Required. Telephone country code.
    pub phone_cc: String,
    /// Required.
    pub phone: String,
    /// Required. ISO language code.
    pub lang_pref: String,
    pub address_line_2: String,
    pub address_line_3: String,
    pub alt_phone_cc: String,
    pub alt_phone: String,
    pub fax_cc: String,
    pub fax: String,
    pub mobile_cc: String,
    pub mobile: String,
    /// Consent to renewal reminder SMS (US customers).
    pub sms_consent: bool,
    /// EU VAT id.
    pub vat_id: String,
    /// Accept the terms and privacy policy.
    pub accept_policy: bool,
    /// Consent to marketing email (EEA customers).
    pub marketing_email_consent: bool,
}

impl CustomerCreateParams {
    /// Builds the sign-up query, rejecting empty required fields.
    pub fn to_query(&self) -> Result<Query, RcError> {
        let required = [
            ("username", &self.username),
            ("passwd", &self.password),
            ("name", &self.name),
            ("company", &self.company),
            ("address-line-1", &self.address_line_1),
            ("city", &self.city),
            ("state", &self.state),
            ("country", &self.country),
            ("zipcode", &self.zipcode),
            ("phone-cc", &self.phone_cc),
            ("phone", &self.phone),
            ("lang-pref", &self.lang_pref),
        ];

        let mut q = Query::new();
        for (key, value) in required {
            if value.is_empty() {
                return Err(RcError::MissingParams(key.to_string()));
            }
            q.set(key, value);
        }

        q.set_non_empty("other-state", &self.other_state)
            .set_non_empty("address-line-2", &self.address_line_2)
            .set_non_empty("address-line-3", &self.address_line_3)
            .set_non_empty("alt-phone-cc", &self.alt_phone_cc)
            .set_non_empty("alt-phone", &self.alt_phone)
            .set_non_empty("fax-cc", &self.fax_cc)
            .set_non_empty("fax", &self.fax)
            .set_non_empty("mobile-cc", &self.mobile_cc)
            .set_non_empty("mobile", &self.mobile)
            .set_flag("sms-consent", self.sms_consent)
            .set_non_empty("vat-id", &self.vat_id)
            .set_flag("accept-policy", self.accept_policy)
            .set_flag("marketing-email-consent", self.marketing_email_consent);

        Ok(q)
    }
}

impl<'a, T: Transport> Customers<'a, T> {
    pub(crate) fn new(client: &'a ResellerClient<T>) -> Self {
        Self { client }
    }

    /// Creates a customer account and returns its id.
    ///
    /// <https://manage.resellerclub.com/kb/answer/804>
    pub async fn create(&self, params: &CustomerCreateParams) -> Result<i64, RcError> {
        let path = "/customers/v2/signup.json";
        let query = self.client.observe(path, params.to_query())?;
        self.client.call_int(Method::POST, path, &query).await
    }
}
