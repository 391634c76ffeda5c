// src/domain/user/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::{
    Capability, Email, PasswordHash, Role, UserId, Username,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    /// Explicit grants on top of the role defaults.
    pub permissions: HashSet<Capability>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Role defaults merged with per-user grants.
    pub fn effective_capabilities(&self) -> HashSet<Capability> {
        let mut caps = self.role.default_capabilities();
        caps.extend(self.permissions.iter().cloned());
        caps
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub permissions: HashSet<Capability>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Email,
        password_hash: PasswordHash,
        role: Role,
        permissions: HashSet<Capability>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if let Some(unknown) = permissions.iter().find(|cap| !cap.is_known()) {
            return Err(DomainError::Validation(format!(
                "unknown permission '{unknown}'"
            )));
        }
        Ok(Self {
            username,
            email,
            password_hash,
            role,
            permissions,
            is_active: true,
            created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub is_active: Option<bool>,
    pub role: Option<Role>,
    pub permissions: Option<HashSet<Capability>>,
    pub password_hash: Option<PasswordHash>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            is_active: None,
            role: None,
            permissions: None,
            password_hash: None,
        }
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_permissions(mut self, permissions: HashSet<Capability>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.is_active.is_none()
            && self.role.is_none()
            && self.permissions.is_none()
            && self.password_hash.is_none()
    }
}
