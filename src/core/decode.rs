//! Field-level decoders for scalars the API encodes inconsistently.
//!
//! Raw entities use these in place of `bool`, `Url` and timestamps so a
//! derived `Deserialize` accepts every wire shape the service emits.

use chrono::{DateTime, FixedOffset};
use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use std::fmt;
use url::Url;

/// Boolean sent as `true`/`false`, `"true"`/`"false"`, `0`/`1` or `"0"`/`"1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseBool(pub bool);

impl From<ResponseBool> for bool {
    fn from(value: ResponseBool) -> Self {
        value.0
    }
}

struct ResponseBoolVisitor;

impl<'de> Visitor<'de> for ResponseBoolVisitor {
    type Value = ResponseBool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean, 0 or 1, or one of \"true\", \"false\", \"0\", \"1\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ResponseBool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(ResponseBool(false)),
            1 => Ok(ResponseBool(true)),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            0 => Ok(ResponseBool(false)),
            1 => Ok(ResponseBool(true)),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "true" | "1" => Ok(ResponseBool(true)),
            "false" | "0" => Ok(ResponseBool(false)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for ResponseBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ResponseBoolVisitor)
    }
}

/// URL sent as a string that is empty when the entity has none.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseUrl(pub Option<Url>);

impl From<ResponseUrl> for Option<Url> {
    fn from(value: ResponseUrl) -> Self {
        value.0
    }
}

struct ResponseUrlVisitor;

impl<'de> Visitor<'de> for ResponseUrlVisitor {
    type Value = ResponseUrl;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a URL string, possibly empty")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(ResponseUrl(None));
        }
        Url::parse(v)
            .map(|url| ResponseUrl(Some(url)))
            .map_err(|e| E::custom(format!("invalid URL {:?}: {}", v, e)))
    }
}

impl<'de> Deserialize<'de> for ResponseUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ResponseUrlVisitor)
    }
}

/// RFC 2822 timestamp such as `Sat, 21 Nov 2015 21:40:55 +0000`; empty when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseTime(pub Option<DateTime<FixedOffset>>);

impl From<ResponseTime> for Option<DateTime<FixedOffset>> {
    fn from(value: ResponseTime) -> Self {
        value.0
    }
}

struct ResponseTimeVisitor;

impl<'de> Visitor<'de> for ResponseTimeVisitor {
    type Value = ResponseTime;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an RFC 2822 timestamp string, possibly empty")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Ok(ResponseTime(None));
        }
        DateTime::parse_from_rfc2822(v)
            .map(|t| ResponseTime(Some(t)))
            .map_err(|e| E::custom(format!("invalid timestamp {:?}: {}", v, e)))
    }
}

impl<'de> Deserialize<'de> for ResponseTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ResponseTimeVisitor)
    }
}
