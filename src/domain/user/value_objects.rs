// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// A `resource:action` pair granting access to one operation group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }

    /// Every permission the system knows about. Backs the permission
    /// catalog endpoint and validates explicit per-user grants.
    pub fn catalog() -> Vec<Capability> {
        use Capability as Cap;
        vec![
            Cap::new("users", "create"),
            Cap::new("users", "read"),
            Cap::new("users", "update"),
            Cap::new("users", "delete"),
            Cap::new("clients", "create"),
            Cap::new("clients", "read"),
            Cap::new("clients", "update"),
            Cap::new("clients", "delete"),
            Cap::new("audit", "read"),
            Cap::new("activity", "read"),
            Cap::new("events", "read"),
            Cap::new("events", "record"),
            Cap::new("inventory", "read"),
            Cap::new("inventory", "record"),
            Cap::new("inventory", "manage"),
        ]
    }

    pub fn is_known(&self) -> bool {
        Self::catalog()
            .iter()
            .any(|cap| cap.matches(&self.resource, &self.action))
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

impl FromStr for Capability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource, action) = s.split_once(':').ok_or_else(|| {
            DomainError::Validation(format!("permission '{s}' must be resource:action"))
        })?;
        if resource.is_empty() || action.is_empty() {
            return Err(DomainError::Validation(format!(
                "permission '{s}' must be resource:action"
            )));
        }
        Ok(Self::new(resource, action))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Operator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Operator => "operator",
        }
    }

    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        match self {
            Role::Admin => Capability::catalog().into_iter().collect(),
            Role::Manager => HashSet::from([
                Cap::new("users", "read"),
                Cap::new("clients", "create"),
                Cap::new("clients", "read"),
                Cap::new("clients", "update"),
                Cap::new("clients", "delete"),
                Cap::new("events", "read"),
                Cap::new("activity", "read"),
                Cap::new("inventory", "read"),
                Cap::new("inventory", "record"),
                Cap::new("inventory", "manage"),
            ]),
            Role::Operator => HashSet::from([
                Cap::new("clients", "create"),
                Cap::new("clients", "read"),
                Cap::new("clients", "update"),
                Cap::new("inventory", "read"),
                Cap::new("inventory", "record"),
            ]),
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Operator
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "operator" => Ok(Role::Operator),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        if value.len() < 3 {
            return Err(DomainError::Validation(
                "username must be at least 3 characters long".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        let valid = trimmed
            .split_once('@')
            .is_some_and(|(local, host)| !local.is_empty() && host.contains('.'));
        if !valid {
            return Err(DomainError::Validation(format!(
                "'{trimmed}' is not a valid email address"
            )));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}

/// Keyset cursor over `(created_at, id)` for user listings.
#[derive(Debug, Clone)]
pub struct UserListCursor {
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
}

impl UserListCursor {
    pub fn new(created_at: DateTime<Utc>, user_id: UserId) -> Self {
        Self {
            created_at,
            user_id,
        }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.created_at.to_rfc3339(), i64::from(self.user_id));
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (created_at_s, id_s) = raw.split_once('|').ok_or_else(invalid)?;
        let created_at = DateTime::parse_from_rfc3339(created_at_s)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id_s.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(created_at, UserId::new(id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_requires_three_chars() {
        assert!(Username::new("ab").is_err());
        assert!(Username::new("abc").is_ok());
    }

    #[test]
    fn email_is_normalised_and_validated() {
        let email = Email::new("  Admin@AlexaTech.PE ").unwrap();
        assert_eq!(email.as_str(), "admin@alexatech.pe");
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("a@nodot").is_err());
    }

    #[test]
    fn capability_parses_resource_action() {
        let cap: Capability = "clients:read".parse().unwrap();
        assert!(cap.matches("clients", "read"));
        assert!("clients".parse::<Capability>().is_err());
    }

    #[test]
    fn admin_holds_every_catalog_capability() {
        let caps = Role::Admin.default_capabilities();
        for cap in Capability::catalog() {
            assert!(caps.contains(&cap), "admin missing {cap}");
        }
    }

    #[test]
    fn user_cursor_roundtrip() {
        let cursor = UserListCursor::new(Utc::now(), UserId::new(7).unwrap());
        let decoded = UserListCursor::decode(&cursor.encode()).unwrap();
        assert_eq!(i64::from(decoded.user_id), 7);
        assert_eq!(decoded.created_at.timestamp(), cursor.created_at.timestamp());
    }
}
