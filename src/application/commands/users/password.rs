use crate::application::error::{ApplicationError, ApplicationResult};

const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ApplicationError::validation(
            "password must contain at least one digit",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_password;

    #[test]
    fn rejects_short_or_digitless_passwords() {
        assert!(validate_password("a1b2c3").is_err());
        assert!(validate_password("longenoughbutnodigit").is_err());
        assert!(validate_password("s3curepassword").is_ok());
    }
}
