use std::sync::Arc;

mod support;

use alexatech_core::application::commands::clients::{
    ClientCommandService, CreateClientCommand, DeleteClientCommand, UpdateClientCommand,
};
use alexatech_core::application::error::ApplicationError;
use alexatech_core::application::queries::clients::{ClientQueryService, ListClientsQuery};
use alexatech_core::domain::client::EntityKind;
use alexatech_core::domain::user::Role;
use support::{ClientBuilder, FixedClock, InMemoryClientRepo, actor_with, admin_actor, capabilities};

fn command_service(repo: Arc<InMemoryClientRepo>) -> ClientCommandService {
    ClientCommandService::new(repo, Arc::new(FixedClock))
}

fn create_command(document: &str, name: &str) -> CreateClientCommand {
    CreateClientCommand {
        entity_kind: EntityKind::Person,
        document_number: document.into(),
        name: name.into(),
        contact_name: None,
        email: None,
        phone: None,
        address: None,
    }
}

#[tokio::test]
async fn create_stores_client_with_actor_attribution() {
    let repo = Arc::new(InMemoryClientRepo::new());
    let svc = command_service(repo.clone());

    let created = svc
        .create(&admin_actor(), create_command("40111222", "Maria Perez"))
        .await
        .expect("create failed");

    assert_eq!(created.document_number, "40111222");
    assert_eq!(created.created_by, Some(1));
    assert!(created.is_active);
}

#[tokio::test]
async fn duplicate_document_number_is_a_conflict() {
    let repo = Arc::new(InMemoryClientRepo::with_clients(vec![
        ClientBuilder::new().id(1).document("40111222").build(),
    ]));
    let svc = command_service(repo);

    let err = svc
        .create(&admin_actor(), create_command("40111222", "Someone Else"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn create_requires_clients_create() {
    let repo = Arc::new(InMemoryClientRepo::new());
    let svc = command_service(repo);

    let reader = actor_with(2, Role::Operator, capabilities(&[("clients", "read")]));
    let err = svc
        .create(&reader, create_command("40111222", "Maria Perez"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn update_with_no_fields_is_rejected() {
    let repo = Arc::new(InMemoryClientRepo::with_clients(vec![
        ClientBuilder::new().id(1).build(),
    ]));
    let svc = command_service(repo);

    let err = svc
        .update(
            &admin_actor(),
            UpdateClientCommand {
                client_id: 1,
                name: None,
                contact_name: None,
                email: None,
                phone: None,
                address: None,
                is_active: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn update_can_clear_an_optional_field() {
    let repo = Arc::new(InMemoryClientRepo::with_clients(vec![
        ClientBuilder::new().id(1).build(),
    ]));
    let svc = command_service(repo);

    let updated = svc
        .update(
            &admin_actor(),
            UpdateClientCommand {
                client_id: 1,
                name: Some("Renamed Client".into()),
                contact_name: None,
                email: Some(Some("new@example.com".into())),
                phone: Some(None),
                address: None,
                is_active: None,
            },
        )
        .await
        .expect("update failed");

    assert_eq!(updated.name, "Renamed Client");
    assert_eq!(updated.email.as_deref(), Some("new@example.com"));
    assert!(updated.phone.is_none());
}

#[tokio::test]
async fn delete_is_a_soft_delete_and_idempotent() {
    let repo = Arc::new(InMemoryClientRepo::with_clients(vec![
        ClientBuilder::new().id(1).build(),
    ]));
    let svc = command_service(repo.clone());

    svc.delete(&admin_actor(), DeleteClientCommand { client_id: 1 })
        .await
        .expect("delete failed");
    // The row survives; it just drops out of default listings.
    svc.delete(&admin_actor(), DeleteClientCommand { client_id: 1 })
        .await
        .expect("second delete should be a no-op");

    let queries = ClientQueryService::new(repo);
    let visible = queries
        .list(&admin_actor(), ListClientsQuery::default())
        .await
        .expect("list failed");
    assert!(visible.items.is_empty());

    let all = queries
        .list(
            &admin_actor(),
            ListClientsQuery {
                include_inactive: true,
                ..ListClientsQuery::default()
            },
        )
        .await
        .expect("list failed");
    assert_eq!(all.items.len(), 1);
    assert!(!all.items[0].is_active);
}

#[tokio::test]
async fn delete_unknown_client_is_not_found() {
    let repo = Arc::new(InMemoryClientRepo::new());
    let svc = command_service(repo);

    let err = svc
        .delete(&admin_actor(), DeleteClientCommand { client_id: 99 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn list_filters_by_entity_kind() {
    let repo = Arc::new(InMemoryClientRepo::with_clients(vec![
        ClientBuilder::new().id(1).document("40111222").build(),
        ClientBuilder::new()
            .id(2)
            .company()
            .document("20600123456")
            .name("Acme SAC")
            .build(),
    ]));
    let queries = ClientQueryService::new(repo);

    let companies = queries
        .list(
            &admin_actor(),
            ListClientsQuery {
                kind: Some(EntityKind::Company),
                ..ListClientsQuery::default()
            },
        )
        .await
        .expect("list failed");
    assert_eq!(companies.items.len(), 1);
    assert_eq!(companies.items[0].name, "Acme SAC");
}
