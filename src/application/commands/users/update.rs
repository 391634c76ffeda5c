use super::{UserCommandService, capability::ensure_capability, register::parse_permissions};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Role, UserId, UserUpdate},
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub is_active: Option<bool>,
    pub role: Option<Role>,
    pub permissions: Option<Vec<String>>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_capability(actor, "users", "update")?;

        let user_id = UserId::new(command.user_id)?;

        let mut update = UserUpdate::new(user_id);

        if let Some(is_active) = command.is_active {
            update = update.with_is_active(is_active);
        }

        if let Some(role) = command.role {
            update = update.with_role(role);
        }

        if let Some(raw) = command.permissions {
            let permissions = parse_permissions(&raw)?;
            if let Some(unknown) = permissions.iter().find(|cap| !cap.is_known()) {
                return Err(ApplicationError::validation(format!(
                    "unknown permission '{unknown}'"
                )));
            }
            update = update.with_permissions(permissions);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;

        // Demoting or disabling cuts existing sessions loose.
        if user.is_active {
            Ok(user.into())
        } else {
            self.session_revocation_store
                .revoke_all_for_user(i64::from(user.id))
                .await?;
            Ok(user.into())
        }
    }
}
