use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Capability, Email, NewUser, PasswordHash, Role, Username},
};
use std::collections::HashSet;

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub permissions: Vec<String>,
}

impl UserCommandService {
    /// Create a user. The very first account becomes an admin without an
    /// actor; afterwards `users:create` is required.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;
        let permissions = parse_permissions(&command.permissions)?;

        let existing = self.user_repo.count().await?;
        let role = self.determine_role(existing, actor, command.role)?;
        self.ensure_identity_available(existing, &username, &email)
            .await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(
            username,
            email,
            password_hash,
            role,
            permissions,
            self.clock.now(),
        )?;
        let user = self.user_repo.insert(new_user).await?;

        Ok(user.into())
    }

    fn determine_role(
        &self,
        existing: u64,
        actor: Option<&AuthenticatedUser>,
        role: Option<Role>,
    ) -> ApplicationResult<Role> {
        if existing == 0 {
            return Ok(Role::Admin);
        }
        let requester = actor
            .ok_or_else(|| ApplicationError::forbidden("administrative privileges are required"))?;
        super::capability::ensure_capability(requester, "users", "create")?;
        Ok(role.unwrap_or_default())
    }

    async fn ensure_identity_available(
        &self,
        existing: u64,
        username: &Username,
        email: &Email,
    ) -> ApplicationResult<()> {
        if existing == 0 {
            return Ok(());
        }

        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }

        Ok(())
    }
}

pub(super) fn parse_permissions(raw: &[String]) -> ApplicationResult<HashSet<Capability>> {
    raw.iter()
        .map(|s| s.parse::<Capability>().map_err(ApplicationError::from))
        .collect()
}
