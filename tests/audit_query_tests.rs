use std::sync::Arc;

mod support;

use alexatech_core::application::error::ApplicationError;
use alexatech_core::application::queries::audit::{
    AuditByResourceQuery, AuditByUserQuery, AuditQueryService, ListAuditLogsQuery,
};
use alexatech_core::domain::audit::{AuditLog, AuditLogCursor};
use alexatech_core::domain::user::{Role, UserId};
use support::{MockAuditRepo, actor_with, admin_actor, capabilities, fixed_time};

fn sample_log(id: i64, user_id: i64, resource_id: i64) -> AuditLog {
    AuditLog {
        id: Some(id),
        user_id: Some(UserId::new(user_id).unwrap()),
        action: "POST /api/v1/clients -> 200".into(),
        resource_type: "http_request".into(),
        resource_id: Some(resource_id),
        details: None,
        ip_address: Some("127.0.0.1".into()),
        user_agent: Some("integration-test".into()),
        created_at: Some(fixed_time()),
    }
}

#[tokio::test]
async fn list_requires_audit_read() {
    let svc = AuditQueryService::new(Arc::new(MockAuditRepo::empty()));
    let outsider = actor_with(2, Role::Operator, capabilities(&[("clients", "read")]));

    let err = svc
        .list(&outsider, ListAuditLogsQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn list_returns_page_and_encodes_next_cursor() {
    let repo = MockAuditRepo {
        items: vec![sample_log(1, 1, 10), sample_log(2, 1, 11)],
        next_cursor: Some(AuditLogCursor::new(fixed_time(), 2)),
    };
    let svc = AuditQueryService::new(Arc::new(repo));

    let page = svc
        .list(&admin_actor(), ListAuditLogsQuery::default())
        .await
        .expect("list failed");
    assert_eq!(page.items.len(), 2);
    assert!(page.has_more);
    let token = page.next_cursor.expect("cursor missing");
    let decoded = AuditLogCursor::decode(&token).expect("cursor should round-trip");
    assert_eq!(decoded.id, 2);
}

#[tokio::test]
async fn list_rejects_invalid_cursor_tokens() {
    let svc = AuditQueryService::new(Arc::new(MockAuditRepo::empty()));

    let err = svc
        .list(
            &admin_actor(),
            ListAuditLogsQuery {
                limit: None,
                cursor: Some("!!not-a-cursor!!".into()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
}

#[tokio::test]
async fn by_user_filters_to_that_user() {
    let repo = MockAuditRepo {
        items: vec![sample_log(1, 1, 10), sample_log(2, 9, 11)],
        next_cursor: None,
    };
    let svc = AuditQueryService::new(Arc::new(repo));

    let page = svc
        .by_user(
            &admin_actor(),
            AuditByUserQuery {
                user_id: 9,
                limit: None,
                cursor: None,
            },
        )
        .await
        .expect("by_user failed");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].user_id, Some(9));
}

#[tokio::test]
async fn by_resource_rejects_blank_resource_type() {
    let svc = AuditQueryService::new(Arc::new(MockAuditRepo::empty()));

    let err = svc
        .by_resource(
            &admin_actor(),
            AuditByResourceQuery {
                resource_type: "  ".into(),
                resource_id: 1,
                limit: None,
                cursor: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}
