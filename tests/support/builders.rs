// tests/support/builders.rs
use std::collections::HashSet;

use alexatech_core::domain::client::{Client, ClientId, DocumentNumber, EntityKind};
use alexatech_core::domain::user::{
    Capability, Email, PasswordHash, Role, User, UserId, Username,
};

use super::mocks::fixed_time;

pub struct UserBuilder {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    role: Role,
    permissions: HashSet<Capability>,
    is_active: bool,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            username: "tester".into(),
            email: "tester@example.com".into(),
            password_hash: "hashed:secret-password".into(),
            role: Role::Operator,
            permissions: HashSet::new(),
            is_active: true,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn permission(mut self, resource: &str, action: &str) -> Self {
        self.permissions.insert(Capability::new(resource, action));
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> User {
        User {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: Email::new(self.email).unwrap(),
            password_hash: PasswordHash::new(self.password_hash).unwrap(),
            role: self.role,
            permissions: self.permissions,
            is_active: self.is_active,
            created_at: fixed_time(),
        }
    }
}

pub struct ClientBuilder {
    id: i64,
    entity_kind: EntityKind,
    document_number: String,
    name: String,
    is_active: bool,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            entity_kind: EntityKind::Person,
            document_number: "12345678".into(),
            name: "Test Client".into(),
            is_active: true,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn company(mut self) -> Self {
        self.entity_kind = EntityKind::Company;
        self
    }

    pub fn document(mut self, document: impl Into<String>) -> Self {
        self.document_number = document.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> Client {
        Client {
            id: ClientId::new(self.id).unwrap(),
            entity_kind: self.entity_kind,
            document_number: DocumentNumber::new(self.document_number).unwrap(),
            name: self.name,
            contact_name: None,
            email: None,
            phone: None,
            address: None,
            is_active: self.is_active,
            created_by: None,
            updated_by: None,
            created_at: fixed_time(),
            updated_at: fixed_time(),
        }
    }
}
