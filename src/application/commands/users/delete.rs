use super::{UserCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        event::SystemEvent,
        user::{UserId, UserUpdate},
    },
};

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    /// Soft-delete: flips `is_active` and revokes every session of the
    /// target. Callers can never delete their own account.
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "users", "delete")?;

        let target_id = UserId::new(command.user_id)?;
        if actor.id == target_id {
            return Err(ApplicationError::conflict(
                "cannot delete the currently authenticated user",
            ));
        }

        let user = self
            .user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if user.is_active {
            let update = UserUpdate::new(target_id).with_is_active(false);
            self.user_repo.update(update).await?;
        }

        self.session_revocation_store
            .revoke_all_for_user(i64::from(target_id))
            .await?;

        let event = SystemEvent::new("user_deactivated")
            .with_details(format!("user {} deactivated", user.username))
            .with_metadata(serde_json::json!({
                "user_id": i64::from(target_id),
                "by": i64::from(actor.id),
            }));
        if let Err(err) = self.event_repo.insert(event).await {
            tracing::warn!(error = %err, "failed to record user_deactivated event");
        }

        Ok(())
    }
}
