// src/presentation/http/middleware/audit.rs
use crate::domain::{activity::UserActivity, audit::AuditLog};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Extension, Request},
    http,
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// Records every mutating request in the audit log, and in the acting
/// user's activity feed when the request was authenticated. Inserts run
/// on a background task so they never delay the response.
pub async fn audit_middleware(
    MaybeAuthenticated(user): MaybeAuthenticated,
    Extension(state): Extension<HttpState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let headers = req.headers().clone();

    let response = next.run(req).await;

    let mutating = matches!(
        method,
        http::Method::POST | http::Method::PUT | http::Method::PATCH | http::Method::DELETE
    );
    if !mutating {
        return response;
    }

    let status = response.status().as_u16();
    let action = format!("{method} {path} -> {status}");
    let user_id = user.map(|u| u.id);

    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let user_agent = headers
        .get(http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let audit_repo = state.services.audit_log_repo();
    let activity_repo = state.services.activity_repo();

    tokio::spawn(async move {
        let log = AuditLog {
            id: None,
            user_id,
            action: action.clone(),
            resource_type: "http_request".to_string(),
            resource_id: None,
            details: None,
            ip_address,
            user_agent,
            created_at: None,
        };
        if let Err(err) = audit_repo.insert(log).await {
            warn!(error = %err, "failed to insert audit log");
        }

        if let Some(user_id) = user_id {
            let activity = UserActivity {
                id: None,
                user_id,
                action: format!("{method} -> {status}"),
                path: Some(path),
                detail: None,
                created_at: None,
            };
            if let Err(err) = activity_repo.insert(activity).await {
                warn!(error = %err, "failed to insert user activity");
            }
        }
    });

    response
}
