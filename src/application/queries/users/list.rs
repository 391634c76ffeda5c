use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CursorPage, UserDto},
        error::ApplicationResult,
        queries::normalize_limit,
    },
    domain::user::UserListCursor,
};

#[derive(Debug, Default)]
pub struct ListUsersQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub search: Option<String>,
}

impl UserQueryService {
    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        query: ListUsersQuery,
    ) -> ApplicationResult<CursorPage<UserDto>> {
        self.ensure_can_read(actor)?;

        let limit = normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(UserListCursor::decode)
            .transpose()?;

        let (users, next) = self
            .user_repo
            .list_page(limit, cursor, query.search.as_deref())
            .await?;

        let items = users.into_iter().map(UserDto::from).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}
