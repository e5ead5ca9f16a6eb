use super::{fetch_list, fetch_single, ApiResponse};
use crate::core::envelope::{ItemShape, ListShape, SingleShape};
use crate::core::pagination::{compact_query, Ceiling, IdWindow, OffsetLimit, FRIENDS_LIMIT_CEILING};
use crate::domain::badge::{Badge, RawBadge};
use crate::domain::checkin::{Checkin, RawCheckin};
use crate::domain::ports::Transport;
use crate::domain::user::{RawUser, User};
use crate::utils::error::Result;
use crate::utils::validation::validate_path_segment;
use std::sync::Arc;

const USER_INFO: SingleShape = SingleShape::Nested("user");
const USER_FRIENDS: ListShape = ListShape::new("items", ItemShape::Wrapped("user"));
const USER_BADGES: ListShape = ListShape::new("items", ItemShape::Bare);
const USER_CHECKINS: ListShape = ListShape::new("checkins", ItemShape::Bare);

/// User lookups: profile, friends, badges and checkins.
pub struct UserService<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for UserService<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> UserService<T> {
    pub(crate) fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Information about the user with the given username. With `compact`,
    /// only basic identity fields are populated.
    pub async fn info(&self, username: &str, compact: bool) -> Result<ApiResponse<User>> {
        validate_path_segment("username", username)?;
        let path = format!("user/info/{}", username);
        fetch_single::<_, RawUser>(self.transport.as_ref(), &path, &compact_query(compact), USER_INFO).await
    }

    /// Up to 25 of the user's friends. Use [`friends_offset_limit`] to page
    /// through more.
    ///
    /// [`friends_offset_limit`]: UserService::friends_offset_limit
    pub async fn friends(&self, username: &str) -> Result<ApiResponse<Vec<User>>> {
        let window = OffsetLimit::friends_default();
        self.friends_offset_limit(username, window.offset, window.limit.unwrap_or(FRIENDS_LIMIT_CEILING))
            .await
    }

    /// A page of the user's friends. `limit` may not exceed 25; larger values
    /// are rejected without contacting the service.
    pub async fn friends_offset_limit(
        &self,
        username: &str,
        offset: u32,
        limit: u32,
    ) -> Result<ApiResponse<Vec<User>>> {
        let query = OffsetLimit::new(offset, limit).to_query(Ceiling::Max(FRIENDS_LIMIT_CEILING))?;
        validate_path_segment("username", username)?;
        let path = format!("user/friends/{}", username);
        fetch_list::<_, RawUser>(self.transport.as_ref(), &path, &query, &USER_FRIENDS).await
    }

    /// Up to 50 of the user's most recently earned badges.
    pub async fn badges(&self, username: &str) -> Result<ApiResponse<Vec<Badge>>> {
        let window = OffsetLimit::badges_default();
        self.badges_offset(username, window.offset).await
    }

    /// A page of the user's badges starting at `offset`. Page size is fixed
    /// by the service at 50.
    pub async fn badges_offset(&self, username: &str, offset: u32) -> Result<ApiResponse<Vec<Badge>>> {
        let query = OffsetLimit::offset_only(offset).to_query(Ceiling::None)?;
        validate_path_segment("username", username)?;
        let path = format!("user/badges/{}", username);
        fetch_list::<_, RawBadge>(self.transport.as_ref(), &path, &query, &USER_BADGES).await
    }

    /// The user's 25 most recent checkins.
    pub async fn checkins(&self, username: &str) -> Result<ApiResponse<Vec<Checkin>>> {
        let window = IdWindow::checkins_default();
        self.checkins_min_max_id_limit(username, window.min_id, window.max_id, window.limit)
            .await
    }

    /// The user's checkins with IDs in `min_id..=max_id`. The values are sent
    /// as given; pass `UNBOUNDED_MAX_ID` for no upper bound.
    pub async fn checkins_min_max_id_limit(
        &self,
        username: &str,
        min_id: i64,
        max_id: i64,
        limit: u32,
    ) -> Result<ApiResponse<Vec<Checkin>>> {
        validate_path_segment("username", username)?;
        let query = IdWindow::new(min_id, max_id, limit).to_query();
        let path = format!("user/checkins/{}", username);
        fetch_list::<_, RawCheckin>(self.transport.as_ref(), &path, &query, &USER_CHECKINS).await
    }
}
