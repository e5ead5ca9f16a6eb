//! Decoding of the `{"response": ...}` envelope every API payload uses.
//!
//! Endpoints differ only in where the entity sits inside `response`, so the
//! layouts are described by [`SingleShape`] and [`ListShape`] and decoded here
//! rather than per endpoint.

use crate::core::export::Export;
use crate::utils::error::ApiErrorDetail;
use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::{Map, Value};

const RESPONSE_KEY: &str = "response";

/// Upper bound on the capacity reserved from an advisory `count`.
const MAX_PRESIZE: usize = 256;

/// Where a single entity sits inside `response`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleShape {
    /// `{"response": {<entity>}}`
    Bare,
    /// `{"response": {"<key>": {<entity>}}}`
    Nested(&'static str),
}

/// How each element of `items` carries its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemShape {
    /// `[{<entity>}, ...]`
    Bare,
    /// `[{"<key>": {<entity>}}, ...]`
    Wrapped(&'static str),
}

/// Counted list layout: `{"response": {"<key>": {"count": N, "items": [...]}}}`.
///
/// When `response.<key>` is not an object and `response` itself carries
/// `items`, the counted pair is read from `response` (`{"response": {"count":
/// N, "items": [...]}}`), which is how some endpoints send it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListShape {
    pub key: &'static str,
    pub item: ItemShape,
}

impl ListShape {
    pub const fn new(key: &'static str, item: ItemShape) -> Self {
        Self { key, item }
    }
}

/// A decoded `{count, items}` pair. `count` is whatever the service reported
/// and may disagree with `items`.
///
/// Missing `items` decode as empty here, which suits collections embedded in
/// an entity. Envelope lists go through [`decode_list`], where `items` is
/// required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub(crate) struct Counted<R> {
    #[serde(default, deserialize_with = "count_hint")]
    pub(crate) count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub(crate) items: Vec<R>,
}

impl<R> Default for Counted<R> {
    fn default() -> Self {
        Self {
            count: None,
            items: Vec::new(),
        }
    }
}

impl<R> Counted<R> {
    fn capacity_hint(&self) -> usize {
        self.count
            .and_then(|c| usize::try_from(c).ok())
            .unwrap_or(self.items.len())
            .min(MAX_PRESIZE)
    }
}

impl<R: Export> Counted<R> {
    /// Exports every decoded item in order. The output always has exactly
    /// `items.len()` elements.
    pub(crate) fn export(self) -> Vec<R::Output> {
        if let Some(count) = self.count {
            if usize::try_from(count).ok() != Some(self.items.len()) {
                tracing::debug!(
                    "Reported count {} differs from {} decoded items",
                    count,
                    self.items.len()
                );
            }
        }
        let mut exported = Vec::with_capacity(self.capacity_hint());
        exported.extend(self.items.into_iter().map(Export::export));
        exported
    }
}

/// Reads `count` as a sizing hint. Values that are not a non-negative
/// integer (or a string holding one) are dropped instead of failing the list.
fn count_hint<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

// Envelope form of a counted list: `items` must be present.
#[derive(Deserialize)]
struct WireList {
    #[serde(default, deserialize_with = "count_hint")]
    count: Option<u64>,
    items: Vec<Value>,
}

fn take_response(bytes: &[u8]) -> serde_json::Result<Value> {
    let mut root: Map<String, Value> = serde_json::from_slice(bytes)?;
    root.remove(RESPONSE_KEY)
        .ok_or_else(|| serde_json::Error::missing_field(RESPONSE_KEY))
}

fn take_key(value: Value, key: &'static str) -> serde_json::Result<Value> {
    match value {
        Value::Object(mut object) => object
            .remove(key)
            .ok_or_else(|| serde_json::Error::missing_field(key)),
        other => Err(serde_json::Error::custom(format!(
            "expected an object containing {:?}, found {}",
            key, other
        ))),
    }
}

fn locate_collection(response: Value, key: &'static str) -> serde_json::Result<Value> {
    let mut body = match response {
        Value::Object(body) => body,
        other => {
            return Err(serde_json::Error::custom(format!(
                "expected a list response object, found {}",
                other
            )))
        }
    };
    match body.remove(key) {
        Some(nested @ Value::Object(_)) => Ok(nested),
        Some(other) => {
            body.insert(key.to_string(), other);
            flat_collection(body, key)
        }
        None => flat_collection(body, key),
    }
}

// `{"response": {"count": N, "items": [...]}}` is accepted only when
// `response` really carries `items`; anything else is a shape mismatch.
fn flat_collection(body: Map<String, Value>, key: &'static str) -> serde_json::Result<Value> {
    if body.contains_key("items") {
        Ok(Value::Object(body))
    } else {
        Err(serde_json::Error::missing_field(key))
    }
}

/// Decodes one entity located by `shape`.
pub fn decode_single<R: DeserializeOwned>(bytes: &[u8], shape: SingleShape) -> serde_json::Result<R> {
    let response = take_response(bytes)?;
    let entity = match shape {
        SingleShape::Bare => response,
        SingleShape::Nested(key) => take_key(response, key)?,
    };
    serde_json::from_value(entity)
}

/// Decodes a counted list located by `shape`. Fails as a whole if the
/// collection or its `items` are missing, or if any item fails; never returns
/// a partial or defaulted list.
pub(crate) fn decode_list<R: DeserializeOwned>(bytes: &[u8], shape: &ListShape) -> serde_json::Result<Counted<R>> {
    let response = take_response(bytes)?;
    let collection = locate_collection(response, shape.key)?;
    let counted: WireList = serde_json::from_value(collection)?;

    let items = counted
        .items
        .into_iter()
        .map(|item| {
            let entity = match shape.item {
                ItemShape::Bare => item,
                ItemShape::Wrapped(key) => take_key(item, key)?,
            };
            serde_json::from_value(entity)
        })
        .collect::<serde_json::Result<Vec<R>>>()?;

    Ok(Counted {
        count: counted.count,
        items,
    })
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    meta: ErrorMeta,
}

#[derive(Deserialize)]
struct ErrorMeta {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    error_type: Option<String>,
    #[serde(default)]
    error_detail: Option<String>,
}

/// Reads the `meta` error block of a failed response, if the body has one.
pub fn decode_error_detail(bytes: &[u8]) -> Option<ApiErrorDetail> {
    let envelope: ErrorEnvelope = serde_json::from_slice(bytes).ok()?;
    Some(ApiErrorDetail {
        code: envelope.meta.code,
        error_type: envelope.meta.error_type,
        error_detail: envelope.meta.error_detail,
    })
}
