//! # Flexible Scalars
//!
//! The API emits the same field as a JSON number in one endpoint and as a quoted
//! string in another (`"orderid": 1234` vs `"orderid": "1234"`). The newtypes in
//! this module accept both spellings so response structs never fail on quoting.
//!
//! `null` decodes to the zero value of each type.

use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;

/// Offset timestamp layout used by some order fields, e.g. `2023-11-14 22:13:20.5+05`.
const OFFSET_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%#z";

/// Decodes a scalar that may be quoted.
///
/// A JSON string is parsed as JSON text of the target type; any other token is
/// converted directly.
pub fn decode_flexible<T>(value: Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Null => Ok(T::default()),
        Value::String(inner) => serde_json::from_str(&inner),
        other => serde_json::from_value(other),
    }
}

/// Decodes a timestamp from any of the API's encodings.
///
/// Quoted input is tried as epoch seconds, then the offset layout, then RFC3339.
/// Unquoted input must be an integer number of epoch seconds.
pub fn decode_timestamp(value: Value) -> Result<DateTime<Utc>, String> {
    let epoch = match value {
        Value::Null => return Ok(DateTime::<Utc>::UNIX_EPOCH),
        Value::String(inner) => {
            if let Ok(secs) = serde_json::from_str::<i64>(&inner) {
                secs
            } else if let Ok(t) = DateTime::parse_from_str(&inner, OFFSET_TIME_FORMAT) {
                return Ok(t.with_timezone(&Utc));
            } else if let Ok(t) = DateTime::parse_from_rfc3339(&inner) {
                return Ok(t.with_timezone(&Utc));
            } else {
                return Err(format!("unrecognized timestamp: {:?}", inner));
            }
        }
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| format!("timestamp is not an integer: {}", n))?,
        other => return Err(format!("invalid timestamp token: {}", other)),
    };

    DateTime::from_timestamp(epoch, 0).ok_or_else(|| format!("timestamp out of range: {}", epoch))
}

macro_rules! flexible_scalar {
    ($name:ident, $inner:ty) => {
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = Value::deserialize(deserializer)?;
                decode_flexible::<$inner>(value)
                    .map($name)
                    .map_err(D::Error::custom)
            }
        }

        impl Deref for $name {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$inner> for $name {
            fn from(v: $inner) -> Self {
                $name(v)
            }
        }

        impl From<$name> for $inner {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

/// Boolean accepting `true` or `"true"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FlexBool(pub bool);

/// Signed integer accepting `42` or `"42"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FlexInt(pub i64);

/// Float accepting `1.5` or `"1.5"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct FlexFloat(pub f64);

flexible_scalar!(FlexBool, bool);
flexible_scalar!(FlexInt, i64);
flexible_scalar!(FlexFloat, f64);

/// UTC instant accepting epoch seconds (quoted or not), the offset layout or RFC3339.
///
/// Serializes as RFC3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FlexTime(pub DateTime<Utc>);

impl FlexTime {
    /// Seconds since the Unix epoch.
    pub fn unix(&self) -> i64 {
        self.0.timestamp()
    }
}

impl Default for FlexTime {
    fn default() -> Self {
        FlexTime(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl<'de> Deserialize<'de> for FlexTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_timestamp(value).map(FlexTime).map_err(D::Error::custom)
    }
}

impl Deref for FlexTime {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for FlexTime {
    fn from(v: DateTime<Utc>) -> Self {
        FlexTime(v)
    }
}

impl fmt::Display for FlexTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.to_rfc3339().fmt(f)
    }
}
