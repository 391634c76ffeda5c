// tests/support/mocks.rs
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use alexatech_core::application::ApplicationResult;
use alexatech_core::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use alexatech_core::application::error::ApplicationError;
use alexatech_core::application::ports::security::{PasswordHasher, TokenManager};
use alexatech_core::application::ports::session_revocation::SessionRevocationStore;
use alexatech_core::application::ports::time::Clock;
use alexatech_core::domain::activity::{UserActivity, UserActivityCursor, UserActivityRepository};
use alexatech_core::domain::audit::{AuditLog, AuditLogCursor, AuditLogRepository};
use alexatech_core::domain::client::{
    Client, ClientId, ClientListCursor, ClientRepository, ClientUpdate, DocumentNumber, EntityKind,
    NewClient,
};
use alexatech_core::domain::errors::{DomainError, DomainResult};
use alexatech_core::domain::event::{SystemEvent, SystemEventCursor, SystemEventRepository};
use alexatech_core::domain::inventory::{
    KardexCursor, KardexEntry, KardexFilter, KardexMovement, KardexRepository, NewMovement,
    NewProduct, NewWarehouse, Product, ProductId, ProductRepository, Sku, Warehouse,
    WarehouseId, WarehouseRepository,
};
use alexatech_core::domain::user::{
    Capability, Email, NewUser, Role, User, UserId, UserListCursor, UserRepository, UserUpdate,
    Username,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_time()
    }
}

pub fn admin_actor() -> AuthenticatedUser {
    actor_with(1, Role::Admin, Capability::catalog())
}

pub fn actor_with(
    id: i64,
    role: Role,
    capabilities: impl IntoIterator<Item = Capability>,
) -> AuthenticatedUser {
    let now = fixed_time();
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: format!("user{id}"),
        role,
        capabilities: capabilities.into_iter().collect(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
        session_id: Some(format!("session-{id}")),
    }
}

pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hashed:{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct StaticTokenManager;

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_time();
        Ok(AuthTokenDto {
            token: format!("token-{}", subject.username),
            issued_at: now,
            expires_at: now + chrono::Duration::hours(1),
            expires_in: 3600,
            session_id: subject.session_id,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if token == "test-token" {
            Ok(admin_actor())
        } else {
            Err(ApplicationError::unauthorized("invalid token"))
        }
    }
}

#[derive(Default)]
pub struct RecordingSessionStore {
    pub revoked: Mutex<Vec<String>>,
    pub tracked: Mutex<Vec<(i64, String)>>,
}

#[async_trait]
impl SessionRevocationStore for RecordingSessionStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        Ok(self.revoked.lock().unwrap().iter().any(|s| s == session_id))
    }

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        self.revoked.lock().unwrap().push(session_id.to_string());
        Ok(())
    }

    async fn add_session_for_user(&self, user_id: i64, session_id: &str) -> ApplicationResult<()> {
        self.tracked
            .lock()
            .unwrap()
            .push((user_id, session_id.to_string()));
        Ok(())
    }

    async fn revoke_all_for_user(&self, user_id: i64) -> ApplicationResult<()> {
        let sessions: Vec<String> = self
            .tracked
            .lock()
            .unwrap()
            .iter()
            .filter(|(uid, _)| *uid == user_id)
            .map(|(_, sid)| sid.clone())
            .collect();
        self.revoked.lock().unwrap().extend(sessions);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next = users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0) + 1;
        Self {
            users: Mutex::new(users),
            next_id: AtomicI64::new(next),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            permissions: new_user.permissions,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(permissions) = update.permissions {
            user.permissions = permissions;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        Ok(user.clone())
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<UserListCursor>,
        search: Option<&str>,
    ) -> DomainResult<(Vec<User>, Option<UserListCursor>)> {
        let mut users: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| {
                search.is_none_or(|needle| {
                    u.username.as_str().contains(needle) || u.email.as_str().contains(needle)
                })
            })
            .cloned()
            .collect();
        users.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });
        if let Some(cursor) = cursor {
            users.retain(|u| {
                (u.created_at, i64::from(u.id))
                    < (cursor.created_at, i64::from(cursor.user_id))
            });
        }
        let has_more = users.len() > limit as usize;
        users.truncate(limit as usize);
        let next = if has_more {
            users
                .last()
                .map(|u| UserListCursor::new(u.created_at, u.id))
        } else {
            None
        };
        Ok((users, next))
    }
}

#[derive(Default)]
pub struct RecordingEventRepo {
    pub events: Mutex<Vec<SystemEvent>>,
}

#[async_trait]
impl SystemEventRepository for RecordingEventRepo {
    async fn insert(&self, event: SystemEvent) -> DomainResult<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }

    async fn list(
        &self,
        event_type: Option<&str>,
        limit: u32,
        _cursor: Option<SystemEventCursor>,
    ) -> DomainResult<(Vec<SystemEvent>, Option<SystemEventCursor>)> {
        let events: Vec<SystemEvent> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| event_type.is_none_or(|t| e.event_type == t))
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((events, None))
    }
}

#[derive(Default)]
pub struct InMemoryClientRepo {
    clients: Mutex<Vec<Client>>,
    next_id: AtomicI64,
}

impl InMemoryClientRepo {
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn with_clients(clients: Vec<Client>) -> Self {
        let next = clients.iter().map(|c| i64::from(c.id)).max().unwrap_or(0) + 1;
        Self {
            clients: Mutex::new(clients),
            next_id: AtomicI64::new(next),
        }
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepo {
    async fn insert(&self, new_client: NewClient) -> DomainResult<Client> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let client = Client {
            id: ClientId::new(id)?,
            entity_kind: new_client.entity_kind,
            document_number: new_client.document_number,
            name: new_client.name,
            contact_name: new_client.contact_name,
            email: new_client.email,
            phone: new_client.phone,
            address: new_client.address,
            is_active: true,
            created_by: new_client.created_by,
            updated_by: new_client.created_by,
            created_at: new_client.created_at,
            updated_at: new_client.created_at,
        };
        self.clients.lock().unwrap().push(client.clone());
        Ok(client)
    }

    async fn find_by_id(&self, id: ClientId) -> DomainResult<Option<Client>> {
        Ok(self
            .clients
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_document(&self, document: &DocumentNumber) -> DomainResult<Option<Client>> {
        Ok(self
            .clients
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.document_number == *document)
            .cloned())
    }

    async fn update(
        &self,
        id: ClientId,
        update: ClientUpdate,
        updated_by: Option<UserId>,
    ) -> DomainResult<Client> {
        let mut clients = self.clients.lock().unwrap();
        let client = clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound("client not found".into()))?;
        if let Some(name) = update.name {
            client.name = name;
        }
        if let Some(contact_name) = update.contact_name {
            client.contact_name = contact_name;
        }
        if let Some(email) = update.email {
            client.email = email;
        }
        if let Some(phone) = update.phone {
            client.phone = phone;
        }
        if let Some(address) = update.address {
            client.address = address;
        }
        if let Some(is_active) = update.is_active {
            client.is_active = is_active;
        }
        client.updated_by = updated_by;
        Ok(client.clone())
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<ClientListCursor>,
        search: Option<&str>,
        kind: Option<EntityKind>,
        include_inactive: bool,
    ) -> DomainResult<(Vec<Client>, Option<ClientListCursor>)> {
        let mut clients: Vec<Client> = self
            .clients
            .lock()
            .unwrap()
            .iter()
            .filter(|c| include_inactive || c.is_active)
            .filter(|c| kind.is_none_or(|k| c.entity_kind == k))
            .filter(|c| {
                search.is_none_or(|needle| {
                    c.name.contains(needle) || c.document_number.as_str().contains(needle)
                })
            })
            .cloned()
            .collect();
        clients.sort_by(|a, b| {
            (b.created_at, i64::from(b.id)).cmp(&(a.created_at, i64::from(a.id)))
        });
        if let Some(cursor) = cursor {
            clients.retain(|c| {
                (c.created_at, i64::from(c.id))
                    < (cursor.created_at, i64::from(cursor.client_id))
            });
        }
        let has_more = clients.len() > limit as usize;
        clients.truncate(limit as usize);
        let next = if has_more {
            clients
                .last()
                .map(|c| ClientListCursor::new(c.created_at, c.id))
        } else {
            None
        };
        Ok((clients, next))
    }
}

#[derive(Default)]
pub struct InMemoryProductRepo {
    products: Mutex<Vec<Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepo {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let next = products.iter().map(|p| i64::from(p.id)).max().unwrap_or(0) + 1;
        Self {
            products: Mutex::new(products),
            next_id: AtomicI64::new(next),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn insert(&self, new_product: NewProduct) -> DomainResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product {
            id: ProductId::new(id)?,
            sku: new_product.sku,
            name: new_product.name,
            is_active: true,
            created_at: new_product.created_at,
        };
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_sku(&self, sku: &Sku) -> DomainResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.sku == *sku)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct InMemoryWarehouseRepo {
    warehouses: Mutex<Vec<Warehouse>>,
    next_id: AtomicI64,
}

impl InMemoryWarehouseRepo {
    pub fn new() -> Self {
        Self {
            warehouses: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn with_warehouses(warehouses: Vec<Warehouse>) -> Self {
        let next = warehouses.iter().map(|w| i64::from(w.id)).max().unwrap_or(0) + 1;
        Self {
            warehouses: Mutex::new(warehouses),
            next_id: AtomicI64::new(next),
        }
    }
}

#[async_trait]
impl WarehouseRepository for InMemoryWarehouseRepo {
    async fn insert(&self, new_warehouse: NewWarehouse) -> DomainResult<Warehouse> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let warehouse = Warehouse {
            id: WarehouseId::new(id)?,
            code: new_warehouse.code,
            name: new_warehouse.name,
            created_at: new_warehouse.created_at,
        };
        self.warehouses.lock().unwrap().push(warehouse.clone());
        Ok(warehouse)
    }

    async fn find_by_id(&self, id: WarehouseId) -> DomainResult<Option<Warehouse>> {
        Ok(self
            .warehouses
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Warehouse>> {
        Ok(self.warehouses.lock().unwrap().clone())
    }
}

/// Serializes balance computation with a plain mutex, mirroring what the
/// row lock does in the real store.
#[derive(Default)]
pub struct InMemoryKardexRepo {
    movements: Mutex<Vec<KardexMovement>>,
    next_id: AtomicI64,
}

impl InMemoryKardexRepo {
    pub fn new() -> Self {
        Self {
            movements: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn entry_for(movement: KardexMovement) -> KardexEntry {
        KardexEntry {
            movement,
            product_sku: Sku::new("SKU-1").unwrap(),
            product_name: "Test Product".into(),
            warehouse_code: "MAIN".into(),
        }
    }
}

#[async_trait]
impl KardexRepository for InMemoryKardexRepo {
    async fn record(&self, movement: NewMovement) -> DomainResult<KardexEntry> {
        let mut movements = self.movements.lock().unwrap();
        let current = movements
            .iter()
            .filter(|m| {
                m.product_id == movement.product_id && m.warehouse_id == movement.warehouse_id
            })
            .next_back()
            .map(|m| m.balance)
            .unwrap_or(0);
        let balance = movement.apply_to(current)?;
        let row = KardexMovement {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            product_id: movement.product_id,
            warehouse_id: movement.warehouse_id,
            kind: movement.kind,
            quantity: movement.quantity,
            balance,
            reference: movement.reference,
            created_by: movement.created_by,
            created_at: movement.created_at,
        };
        movements.push(row.clone());
        Ok(Self::entry_for(row))
    }

    async fn balance(
        &self,
        product_id: ProductId,
        warehouse_id: WarehouseId,
    ) -> DomainResult<i64> {
        Ok(self
            .movements
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.product_id == product_id && m.warehouse_id == warehouse_id)
            .next_back()
            .map(|m| m.balance)
            .unwrap_or(0))
    }

    async fn list_page(
        &self,
        filter: &KardexFilter,
        limit: u32,
        cursor: Option<KardexCursor>,
    ) -> DomainResult<(Vec<KardexEntry>, Option<KardexCursor>)> {
        let mut rows: Vec<KardexMovement> = self
            .movements
            .lock()
            .unwrap()
            .iter()
            .filter(|m| filter.product_id.is_none_or(|p| m.product_id == p))
            .filter(|m| filter.warehouse_id.is_none_or(|w| m.warehouse_id == w))
            .filter(|m| filter.kind.is_none_or(|k| m.kind == k))
            .filter(|m| filter.from.is_none_or(|from| m.created_at >= from))
            .filter(|m| filter.to.is_none_or(|to| m.created_at <= to))
            .cloned()
            .collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        if let Some(cursor) = cursor {
            rows.retain(|m| (m.created_at, m.id) < (cursor.created_at, cursor.id));
        }
        let has_more = rows.len() > limit as usize;
        rows.truncate(limit as usize);
        let next = if has_more {
            rows.last().map(|m| KardexCursor::new(m.created_at, m.id))
        } else {
            None
        };
        Ok((rows.into_iter().map(Self::entry_for).collect(), next))
    }
}

pub struct MockAuditRepo {
    pub items: Vec<AuditLog>,
    pub next_cursor: Option<AuditLogCursor>,
}

impl MockAuditRepo {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }
}

#[async_trait]
impl AuditLogRepository for MockAuditRepo {
    async fn insert(&self, _log: AuditLog) -> DomainResult<()> {
        Ok(())
    }

    async fn list(
        &self,
        _limit: u32,
        _cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<AuditLogCursor>)> {
        Ok((self.items.clone(), self.next_cursor.clone()))
    }

    async fn find_by_user(
        &self,
        user_id: i64,
        _limit: u32,
        _cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<AuditLogCursor>)> {
        let items = self
            .items
            .iter()
            .filter(|log| log.user_id.map(i64::from) == Some(user_id))
            .cloned()
            .collect();
        Ok((items, self.next_cursor.clone()))
    }

    async fn find_by_resource(
        &self,
        resource_type: &str,
        resource_id: i64,
        _limit: u32,
        _cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<AuditLogCursor>)> {
        let items = self
            .items
            .iter()
            .filter(|log| {
                log.resource_type == resource_type && log.resource_id == Some(resource_id)
            })
            .cloned()
            .collect();
        Ok((items, self.next_cursor.clone()))
    }
}

#[derive(Default)]
pub struct InMemoryActivityRepo {
    pub entries: Mutex<Vec<UserActivity>>,
}

#[async_trait]
impl UserActivityRepository for InMemoryActivityRepo {
    async fn insert(&self, activity: UserActivity) -> DomainResult<()> {
        self.entries.lock().unwrap().push(activity);
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: UserId,
        limit: u32,
        _cursor: Option<UserActivityCursor>,
    ) -> DomainResult<(Vec<UserActivity>, Option<UserActivityCursor>)> {
        let entries: Vec<UserActivity> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((entries, None))
    }
}

pub fn capabilities(pairs: &[(&str, &str)]) -> HashSet<Capability> {
    pairs
        .iter()
        .map(|(resource, action)| Capability::new(*resource, *action))
        .collect()
}
