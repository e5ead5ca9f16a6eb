use crate::core::decode::ResponseTime;
use crate::core::envelope::Counted;
use crate::core::export::Export;
use crate::domain::badge::{Badge, RawBadge};
use crate::domain::beer::{Beer, RawBeer};
use crate::domain::brewery::{Brewery, RawBrewery};
use crate::domain::user::{RawUser, User};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// A checkin: one user drinking one beer, with the brewery that made it and
/// any badges the checkin earned.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkin {
    pub id: i64,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub comment: String,
    pub user_rating: f64,
    pub user: User,
    pub beer: Beer,
    pub brewery: Brewery,
    pub badges: Vec<Badge>,
    pub toast_count: i64,
    pub comment_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Tally {
    count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCheckin {
    checkin_id: i64,
    created_at: ResponseTime,
    checkin_comment: String,
    rating_score: f64,
    user: RawUser,
    beer: RawBeer,
    brewery: RawBrewery,
    badges: Counted<RawBadge>,
    toasts: Tally,
    comments: Tally,
}

impl Export for RawCheckin {
    type Output = Checkin;

    fn export(self) -> Checkin {
        Checkin {
            id: self.checkin_id,
            created_at: self.created_at.into(),
            comment: self.checkin_comment,
            user_rating: self.rating_score,
            user: self.user.export(),
            beer: self.beer.export(),
            brewery: self.brewery.export(),
            badges: self.badges.export(),
            toast_count: self.toasts.count,
            comment_count: self.comments.count,
        }
    }
}
