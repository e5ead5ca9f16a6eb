//! Pagination windows for list endpoints and the ceilings checked before a
//! request leaves the process.

use crate::utils::error::{Result, UntappdError};
use std::collections::BTreeMap;

/// Most friends the user friends endpoint returns in one call.
pub const FRIENDS_LIMIT_CEILING: u32 = 25;

/// The badges endpoint returns at most this many of the most recent badges.
/// Enforced by the service, not by this crate.
pub const BADGES_SERVICE_CAP: u32 = 50;

pub const CHECKINS_DEFAULT_LIMIT: u32 = 25;

/// `max_id` sentinel meaning "no upper bound". Not a real checkin ID.
pub const UNBOUNDED_MAX_ID: i64 = i32::MAX as i64;

/// Query parameters for one request, kept in key order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    params: BTreeMap<String, String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn extend(&mut self, other: &Query) -> &mut Self {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }
}

/// Maximum `limit` an endpoint accepts per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ceiling {
    /// Not checked here; whatever the service enforces applies.
    None,
    Max(u32),
}

pub fn check_limit(limit: u32, ceiling: Ceiling) -> Result<()> {
    match ceiling {
        Ceiling::Max(max) if limit > max => Err(UntappdError::LimitExceeded {
            limit,
            ceiling: max,
        }),
        _ => Ok(()),
    }
}

/// `offset`/`limit` window. A `None` limit leaves the parameter out so the
/// service default applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetLimit {
    pub offset: u32,
    pub limit: Option<u32>,
}

impl OffsetLimit {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset,
            limit: Some(limit),
        }
    }

    pub fn offset_only(offset: u32) -> Self {
        Self {
            offset,
            limit: None,
        }
    }

    /// First page of friends at the maximum page size.
    pub fn friends_default() -> Self {
        Self::new(0, FRIENDS_LIMIT_CEILING)
    }

    /// First page of badges; page size is fixed by the service.
    pub fn badges_default() -> Self {
        Self::offset_only(0)
    }

    pub fn to_query(&self, ceiling: Ceiling) -> Result<Query> {
        let mut query = Query::new();
        query.set("offset", self.offset);
        if let Some(limit) = self.limit {
            check_limit(limit, ceiling)?;
            query.set("limit", limit);
        }
        Ok(query)
    }
}

/// `min_id`/`max_id`/`limit` window, passed through without a ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdWindow {
    pub min_id: i64,
    pub max_id: i64,
    pub limit: u32,
}

impl IdWindow {
    pub fn new(min_id: i64, max_id: i64, limit: u32) -> Self {
        Self {
            min_id,
            max_id,
            limit,
        }
    }

    /// Most recent checkins with no upper ID bound.
    pub fn checkins_default() -> Self {
        Self::new(0, UNBOUNDED_MAX_ID, CHECKINS_DEFAULT_LIMIT)
    }

    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .set("min_id", self.min_id)
            .set("max_id", self.max_id)
            .set("limit", self.limit);
        query
    }
}

/// `compact=true` asks the service to omit detail fields. Absent otherwise.
pub fn compact_query(compact: bool) -> Query {
    let mut query = Query::new();
    if compact {
        query.set("compact", "true");
    }
    query
}
