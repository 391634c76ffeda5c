use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{event::SystemEvent, user::Username},
};
use uuid::Uuid;

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)?;
        let user = match self
            .find_and_authenticate_user(&username, &command.password)
            .await
        {
            Ok(user) => user,
            Err(err) => {
                self.record_failed_login(&username).await;
                return Err(err);
            }
        };

        let session_id = Uuid::new_v4().to_string();
        let token = self.issue_session_token(&user, &session_id).await?;
        let user_dto: UserDto = user.into();

        Ok(LoginResult {
            token,
            user: user_dto,
        })
    }

    async fn issue_session_token(
        &self,
        user: &crate::domain::user::User,
        session_id: &str,
    ) -> ApplicationResult<AuthTokenDto> {
        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.effective_capabilities(),
            session_id: Some(session_id.to_string()),
        };

        let token = self.token_manager.issue(subject).await?;

        self.session_revocation_store
            .add_session_for_user(i64::from(user.id), session_id)
            .await?;

        Ok(token)
    }

    async fn find_and_authenticate_user(
        &self,
        username: &Username,
        password: &str,
    ) -> ApplicationResult<crate::domain::user::User> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }

    /// Failed logins become system events; a failing event insert must
    /// never mask the authentication error.
    async fn record_failed_login(&self, username: &Username) {
        let event = SystemEvent::new("auth_failure")
            .with_details("login rejected")
            .with_metadata(serde_json::json!({ "username": username.as_str() }));
        if let Err(err) = self.event_repo.insert(event).await {
            tracing::warn!(error = %err, "failed to record auth_failure event");
        }
    }
}
