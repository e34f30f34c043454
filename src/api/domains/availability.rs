//! Domain availability check (`/domains/available.json`).

use super::Domains;
use crate::api::query::Query;
use crate::core::error::RcError;
use crate::retrieve::Transport;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Availability of one domain name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainAvailability {
    pub domain: String,
    /// Product key of the TLD. Empty when the API did not send one.
    pub classkey: String,
    /// One of the [`status`](super::status) constants.
    pub status: String,
}

/// Reads an availability response keyed by domain name, as returned by
/// [`decode_map`](crate::core::decode::decode_map).
///
/// Every entry must be an object with a string `status`; one malformed entry
/// fails the whole response. An empty map is an error as well. Results are
/// sorted by domain name.
pub fn parse_availability(map: Map<String, Value>) -> Result<Vec<DomainAvailability>, RcError> {
    let entries: Option<Vec<DomainAvailability>> = map
        .iter()
        .map(|(domain, data)| {
            let entry = data.as_object()?;
            let status = entry.get("status").and_then(Value::as_str)?;
            let classkey = entry
                .get("classkey")
                .and_then(Value::as_str)
                .unwrap_or_default();

            Some(DomainAvailability {
                domain: domain.clone(),
                classkey: classkey.to_string(),
                status: status.to_string(),
            })
        })
        .collect();

    let Some(mut out) = entries else {
        return Err(RcError::something_went_wrong(Value::Object(map)));
    };

    if out.is_empty() {
        return Err(RcError::something_went_wrong(Value::Object(map)));
    }

    out.sort_by(|a, b| a.domain.cmp(&b.domain));
    Ok(out)
}

impl<T: Transport> Domains<'_, T> {
    /// Checks availability of every `domain_names` x `tlds` combination.
    ///
    /// <https://manage.resellerclub.com/kb/answer/764>
    pub async fn check_availability(
        &self,
        domain_names: &[&str],
        tlds: &[&str],
    ) -> Result<Vec<DomainAvailability>, RcError> {
        let path = "/domains/available.json";
        if domain_names.is_empty() {
            return self.client.observe(path, Err(RcError::MissingParams("domain-name".into())));
        }
        if tlds.is_empty() {
            return self.client.observe(path, Err(RcError::NoTldsSelected));
        }

        let mut query = Query::new();
        query.add_all("domain-name", domain_names).add_all("tlds", tlds);

        let map = self.client.call_map(Method::GET, path, &query).await?;
        self.client.observe(path, parse_availability(map))
    }
}
