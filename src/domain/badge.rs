use crate::core::decode::{ResponseBool, ResponseTime, ResponseUrl};
use crate::core::export::Export;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use url::Url;

/// A badge earned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: i64,
    pub user_badge_id: i64,
    pub checkin_id: i64,
    pub name: String,
    pub description: String,
    pub hint: String,
    pub active: bool,
    pub is_level: bool,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub images: BadgeImages,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BadgeImages {
    pub small: Option<Url>,
    pub medium: Option<Url>,
    pub large: Option<Url>,
}

impl BadgeImages {
    fn is_empty(&self) -> bool {
        self.small.is_none() && self.medium.is_none() && self.large.is_none()
    }
}

// The badges endpoint nests images under `media`; badges embedded in a
// checkin use `badge_image` with short keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawBadgeMedia {
    badge_image_sm: ResponseUrl,
    badge_image_md: ResponseUrl,
    badge_image_lg: ResponseUrl,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawBadgeImage {
    sm: ResponseUrl,
    md: ResponseUrl,
    lg: ResponseUrl,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawBadge {
    badge_id: i64,
    user_badge_id: i64,
    checkin_id: i64,
    badge_name: String,
    badge_description: String,
    badge_hint: String,
    badge_active_status: ResponseBool,
    is_level: ResponseBool,
    created_at: ResponseTime,
    media: RawBadgeMedia,
    badge_image: RawBadgeImage,
}

impl Export for RawBadge {
    type Output = Badge;

    fn export(self) -> Badge {
        let media = BadgeImages {
            small: self.media.badge_image_sm.into(),
            medium: self.media.badge_image_md.into(),
            large: self.media.badge_image_lg.into(),
        };
        let images = if media.is_empty() {
            BadgeImages {
                small: self.badge_image.sm.into(),
                medium: self.badge_image.md.into(),
                large: self.badge_image.lg.into(),
            }
        } else {
            media
        };

        Badge {
            id: self.badge_id,
            user_badge_id: self.user_badge_id,
            checkin_id: self.checkin_id,
            name: self.badge_name,
            description: self.badge_description,
            hint: self.badge_hint,
            active: self.badge_active_status.into(),
            is_level: self.is_level.into(),
            created_at: self.created_at.into(),
            images,
        }
    }
}
