// Domain layer: public entities, their raw wire forms, and the transport port.

pub mod badge;
pub mod beer;
pub mod brewery;
pub mod checkin;
pub mod ports;
pub mod user;

pub use badge::{Badge, BadgeImages};
pub use beer::Beer;
pub use brewery::{Brewery, BreweryContact, BreweryLocation, BreweryRating, BreweryStats};
pub use checkin::Checkin;
pub use ports::{Method, RawResponse, ResponseMeta, Transport};
pub use user::{User, UserStats};
