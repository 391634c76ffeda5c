use std::sync::Arc;

use crate::application::{
    commands::{
        clients::ClientCommandService, events::SystemEventCommandService,
        inventory::InventoryCommandService, users::UserCommandService,
    },
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::{
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        time::Clock,
    },
    queries::{
        activity::ActivityQueryService, audit::AuditQueryService, clients::ClientQueryService,
        events::SystemEventQueryService, inventory::InventoryQueryService,
        users::UserQueryService,
    },
};
use crate::domain::{
    activity::UserActivityRepository,
    audit::AuditLogRepository,
    client::ClientRepository,
    event::SystemEventRepository,
    inventory::{KardexRepository, ProductRepository, WarehouseRepository},
    user::UserRepository,
};

pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub clients: Arc<dyn ClientRepository>,
    pub audit_logs: Arc<dyn AuditLogRepository>,
    pub activity: Arc<dyn UserActivityRepository>,
    pub events: Arc<dyn SystemEventRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub warehouses: Arc<dyn WarehouseRepository>,
    pub kardex: Arc<dyn KardexRepository>,
}

/// One bundle of every use-case service, shared behind an `Arc` by the
/// HTTP layer.
pub struct ApplicationServices {
    user_commands: UserCommandService,
    user_queries: UserQueryService,
    client_commands: ClientCommandService,
    client_queries: ClientQueryService,
    inventory_commands: InventoryCommandService,
    inventory_queries: InventoryQueryService,
    audit_queries: AuditQueryService,
    activity_queries: ActivityQueryService,
    event_commands: SystemEventCommandService,
    event_queries: SystemEventQueryService,
    audit_repo: Arc<dyn AuditLogRepository>,
    activity_repo: Arc<dyn UserActivityRepository>,
    event_repo: Arc<dyn SystemEventRepository>,
    token_manager: Arc<dyn TokenManager>,
    session_revocation: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        session_revocation: Arc<dyn SessionRevocationStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let user_commands = UserCommandService::new(
            repos.users.clone(),
            repos.events.clone(),
            password_hasher,
            token_manager.clone(),
            session_revocation.clone(),
            clock.clone(),
        );
        let user_queries = UserQueryService::new(repos.users.clone());
        let client_commands = ClientCommandService::new(repos.clients.clone(), clock.clone());
        let client_queries = ClientQueryService::new(repos.clients);
        let inventory_commands = InventoryCommandService::new(
            repos.products.clone(),
            repos.warehouses.clone(),
            repos.kardex.clone(),
            clock.clone(),
        );
        let inventory_queries =
            InventoryQueryService::new(repos.products, repos.warehouses, repos.kardex);
        let audit_queries = AuditQueryService::new(repos.audit_logs.clone());
        let activity_queries = ActivityQueryService::new(repos.activity.clone());
        let event_commands = SystemEventCommandService::new(repos.events.clone(), clock);
        let event_queries = SystemEventQueryService::new(repos.events.clone());

        Self {
            user_commands,
            user_queries,
            client_commands,
            client_queries,
            inventory_commands,
            inventory_queries,
            audit_queries,
            activity_queries,
            event_commands,
            event_queries,
            audit_repo: repos.audit_logs,
            activity_repo: repos.activity,
            event_repo: repos.events,
            token_manager,
            session_revocation,
        }
    }

    pub fn user_commands(&self) -> &UserCommandService {
        &self.user_commands
    }

    pub fn user_queries(&self) -> &UserQueryService {
        &self.user_queries
    }

    pub fn client_commands(&self) -> &ClientCommandService {
        &self.client_commands
    }

    pub fn client_queries(&self) -> &ClientQueryService {
        &self.client_queries
    }

    pub fn inventory_commands(&self) -> &InventoryCommandService {
        &self.inventory_commands
    }

    pub fn inventory_queries(&self) -> &InventoryQueryService {
        &self.inventory_queries
    }

    pub fn audit_queries(&self) -> &AuditQueryService {
        &self.audit_queries
    }

    pub fn activity_queries(&self) -> &ActivityQueryService {
        &self.activity_queries
    }

    pub fn event_commands(&self) -> &SystemEventCommandService {
        &self.event_commands
    }

    pub fn event_queries(&self) -> &SystemEventQueryService {
        &self.event_queries
    }

    pub fn audit_log_repo(&self) -> Arc<dyn AuditLogRepository> {
        self.audit_repo.clone()
    }

    pub fn activity_repo(&self) -> Arc<dyn UserActivityRepository> {
        self.activity_repo.clone()
    }

    pub fn event_repo(&self) -> Arc<dyn SystemEventRepository> {
        self.event_repo.clone()
    }

    /// Validates a bearer token and rejects revoked sessions. The HTTP
    /// extractor calls this for every authenticated request.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        if let Some(session_id) = user.session_id.as_deref()
            && self.session_revocation.is_revoked(session_id).await?
        {
            return Err(ApplicationError::unauthorized("session has been revoked"));
        }
        Ok(user)
    }
}
