use super::{UserCommandService, capability::ensure_capability, password::validate_password};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PasswordHash, User, UserId, UserUpdate},
};

pub struct ChangePasswordCommand {
    pub user_id: i64,
    pub current_password: Option<String>,
    pub new_password: String,
}

impl UserCommandService {
    /// Self-service changes must prove the current password. Admin
    /// resets skip that proof but revoke every live session of the
    /// target, so an old token cannot outlive the credential it came
    /// from.
    pub async fn change_password(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        let target_id = UserId::new(command.user_id)?;

        let user = self
            .user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let is_self = actor.id == user.id;
        self.authorize_password_change(actor, &user, is_self, command.current_password.as_deref())
            .await?;

        validate_password(&command.new_password)?;
        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let update = UserUpdate::new(target_id).with_password_hash(PasswordHash::new(hashed)?);
        self.user_repo.update(update).await?;

        if !is_self {
            self.session_revocation_store
                .revoke_all_for_user(i64::from(target_id))
                .await?;
        }

        Ok(())
    }

    async fn authorize_password_change(
        &self,
        actor: &AuthenticatedUser,
        user: &User,
        is_self: bool,
        current_password: Option<&str>,
    ) -> ApplicationResult<()> {
        if !is_self {
            ensure_capability(actor, "users", "update")?;
            return Ok(());
        }

        let current = current_password
            .ok_or_else(|| ApplicationError::validation("current password is required"))?;
        self.password_hasher
            .verify(current, user.password_hash.as_str())
            .await
    }
}
