// src/main.rs
use alexatech_core::application::services::{ApplicationServices, Repositories};
use alexatech_core::config::AppConfig;
use alexatech_core::domain::event::SystemEvent;
use alexatech_core::infrastructure::database::{init_pool, run_migrations};
use alexatech_core::infrastructure::repositories::{
    PostgresAuditLogRepository, PostgresClientRepository, PostgresKardexRepository,
    PostgresProductRepository, PostgresSystemEventRepository, PostgresUserActivityRepository,
    PostgresUserRepository, PostgresWarehouseRepository,
};
use alexatech_core::infrastructure::security::{
    Argon2PasswordHasher, BiscuitTokenManager, InMemorySessionRevocationStore,
};
use alexatech_core::infrastructure::time::SystemClock;
use alexatech_core::presentation::http::routes::build_router;
use alexatech_core::presentation::http::state::HttpState;
use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,sqlx=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let pool = init_pool(config.database_url())
        .await
        .context("failed to connect to the database")?;
    run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        clients: Arc::new(PostgresClientRepository::new(pool.clone())),
        audit_logs: Arc::new(PostgresAuditLogRepository::new(pool.clone())),
        activity: Arc::new(PostgresUserActivityRepository::new(pool.clone())),
        events: Arc::new(PostgresSystemEventRepository::new(pool.clone())),
        products: Arc::new(PostgresProductRepository::new(pool.clone())),
        warehouses: Arc::new(PostgresWarehouseRepository::new(pool.clone())),
        kardex: Arc::new(PostgresKardexRepository::new(pool.clone())),
    };

    let token_manager = Arc::new(
        BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())
            .context("failed to initialise the token manager")?,
    );

    let services = Arc::new(ApplicationServices::new(
        repos,
        Arc::new(Argon2PasswordHasher),
        token_manager,
        Arc::new(InMemorySessionRevocationStore::new()),
        Arc::new(SystemClock),
    ));

    let event_repo = services.event_repo();
    if let Err(err) = event_repo
        .insert(SystemEvent::new("server_started").with_details(format!(
            "listening on {}",
            config.listen_addr()
        )))
        .await
    {
        tracing::warn!(error = %err, "could not record startup event");
    }

    let app = build_router(
        HttpState {
            services: services.clone(),
        },
        config.allowed_origins(),
    );

    let listener = TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    tracing::info!(addr = %config.listen_addr(), "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Err(err) = event_repo.insert(SystemEvent::new("server_stopped")).await {
        tracing::warn!(error = %err, "could not record shutdown event");
    }
    tracing::info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install ctrl-c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
