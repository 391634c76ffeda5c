use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub(super) fn ensure_capability(
    user: &AuthenticatedUser,
    action: &str,
) -> ApplicationResult<()> {
    if user.has_capability("inventory", action) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing capability inventory:{action}"
        )))
    }
}
