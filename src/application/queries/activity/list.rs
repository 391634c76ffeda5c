use super::ActivityQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CursorPage, UserActivityDto},
        error::{ApplicationError, ApplicationResult},
        queries::normalize_limit,
    },
    domain::{activity::UserActivityCursor, user::UserId},
};

#[derive(Debug)]
pub struct UserActivityQuery {
    pub user_id: i64,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ActivityQueryService {
    /// Users may always read their own trail; anyone else's requires
    /// activity:read.
    pub async fn for_user(
        &self,
        actor: &AuthenticatedUser,
        query: UserActivityQuery,
    ) -> ApplicationResult<CursorPage<UserActivityDto>> {
        let user_id = UserId::new(query.user_id)?;
        if user_id != actor.id && !actor.has_capability("activity", "read") {
            return Err(ApplicationError::forbidden(
                "missing capability activity:read",
            ));
        }

        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(UserActivityCursor::decode)
            .transpose()?;

        let (rows, next) = self
            .activity_repo
            .find_by_user(user_id, limit, cursor)
            .await?;
        let items = rows.into_iter().map(UserActivityDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}
