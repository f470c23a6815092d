use std::sync::Arc;

use anyhow::{Context, Result};
use dinopark::{
    application::dino_service::DinoService,
    build_router,
    config::{AppConfig, StoreBackend},
    infrastructure::{
        DinoRepository, in_memory_dino_repository::InMemoryDinoRepository,
        postgres_dino_repository::PostgresDinoRepository,
    },
    state::AppState,
};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let repository = open_repository(&config).await?;

    let service = Arc::new(DinoService::new(repository));
    let app = build_router(AppState::new(service), config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        bind_addr = %config.bind_addr,
        store = ?config.store,
        "dinopark API started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn open_repository(config: &AppConfig) -> Result<Arc<dyn DinoRepository>> {
    match config.store {
        StoreBackend::Memory => Ok(Arc::new(InMemoryDinoRepository::new())),
        StoreBackend::Postgres => {
            let db = &config.database;
            let pool = PgPoolOptions::new()
                .max_connections(db.max_connections)
                .connect_with(db.connect_options())
                .await
                .with_context(|| {
                    format!("failed to connect to postgres at {}:{}/{}", db.host, db.port, db.name)
                })?;

            info!(host = %db.host, port = db.port, database = %db.name, "database connection established");
            Ok(Arc::new(PostgresDinoRepository::new(pool)))
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dinopark=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install ctrl+c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
