use crate::core::decode::{ResponseBool, ResponseTime, ResponseUrl};
use crate::core::export::Export;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use url::Url;

/// An Untappd user.
///
/// Compact responses omit everything but the identity fields; the rest are
/// then left at their zero values.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uid: i64,
    pub id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<Url>,
    pub location: String,
    pub bio: String,
    pub url: String,
    pub is_private: bool,
    pub is_supporter: bool,
    pub date_joined: Option<DateTime<FixedOffset>>,
    pub stats: UserStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub total_badges: i64,
    pub total_friends: i64,
    pub total_checkins: i64,
    pub total_beers: i64,
    pub total_created_beers: i64,
    pub total_followings: i64,
    pub total_photos: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawUser {
    uid: i64,
    id: i64,
    user_name: String,
    first_name: String,
    last_name: String,
    user_avatar: ResponseUrl,
    location: String,
    bio: String,
    url: String,
    is_private: ResponseBool,
    is_supporter: ResponseBool,
    date_joined: ResponseTime,
    stats: UserStats,
}

impl Export for RawUser {
    type Output = User;

    fn export(self) -> User {
        User {
            uid: self.uid,
            id: self.id,
            user_name: self.user_name,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar: self.user_avatar.into(),
            location: self.location,
            bio: self.bio,
            url: self.url,
            is_private: self.is_private.into(),
            is_supporter: self.is_supporter.into(),
            date_joined: self.date_joined.into(),
            stats: self.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;

    #[test]
    fn test_export_maps_every_field() {
        let raw: RawUser = serde_json::from_value(json!({
            "uid": 1089,
            "id": 1089,
            "user_name": "gregavola",
            "first_name": "Greg",
            "last_name": "Avola",
            "user_avatar": "https://gravatar.com/avatar/abc.jpg",
            "location": "New York, NY",
            "bio": "Co-founder",
            "url": "https://untappd.com/user/gregavola",
            "is_private": 0,
            "is_supporter": "1",
            "date_joined": "Sat, 21 Nov 2009 21:40:55 +0000",
            "stats": {
                "total_badges": 512,
                "total_friends": 300,
                "total_checkins": 4000,
                "total_beers": 2500,
                "total_created_beers": 3,
                "total_followings": 10,
                "total_photos": 900
            },
            "relationship": "self"
        }))
        .unwrap();
        let user = raw.export();

        assert_eq!(user.uid, 1089);
        assert_eq!(user.id, 1089);
        assert_eq!(user.user_name, "gregavola");
        assert_eq!(user.first_name, "Greg");
        assert_eq!(user.last_name, "Avola");
        assert_eq!(
            user.avatar.as_ref().map(Url::as_str),
            Some("https://gravatar.com/avatar/abc.jpg")
        );
        assert_eq!(user.location, "New York, NY");
        assert_eq!(user.bio, "Co-founder");
        assert_eq!(user.url, "https://untappd.com/user/gregavola");
        assert!(!user.is_private);
        assert!(user.is_supporter);
        assert_eq!(user.date_joined.map(|d| d.year()), Some(2009));
        assert_eq!(user.stats.total_badges, 512);
        assert_eq!(user.stats.total_photos, 900);
    }

    #[test]
    fn test_compact_user_keeps_zero_values() {
        let raw: RawUser = serde_json::from_value(json!({
            "uid": 5,
            "user_name": "mdlayher",
            "first_name": "Matt",
            "last_name": "Layher",
            "user_avatar": ""
        }))
        .unwrap();
        let user = raw.export();

        assert_eq!(user.uid, 5);
        assert_eq!(user.avatar, None);
        assert_eq!(user.date_joined, None);
        assert!(!user.is_private);
        assert_eq!(user.stats, UserStats::default());
    }
}
