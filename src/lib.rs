//! Typed client for the Untappd v4 API.
//!
//! Responses are decoded into raw wire structs that tolerate the API's loose
//! scalar encodings, then exported into the public domain types. List
//! endpoints share one pagination contract; limits above a known ceiling are
//! rejected before any request is made.

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::HttpTransport;
pub use crate::app::{ApiResponse, BreweryService, Client, UserService};
pub use crate::config::ClientConfig;
pub use crate::core::pagination::{IdWindow, OffsetLimit, Query, UNBOUNDED_MAX_ID};
pub use crate::domain::{
    Badge, BadgeImages, Beer, Brewery, BreweryContact, BreweryLocation, BreweryRating,
    BreweryStats, Checkin, Method, RawResponse, ResponseMeta, Transport, User, UserStats,
};
pub use crate::utils::error::{ApiErrorDetail, Result, TransportError, UntappdError};
