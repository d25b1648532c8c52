use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &roster::config::CONFIG;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.server.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        db_host = %cfg.database.host,
        db_name = %cfg.database.name,
        bind = %cfg.server.bind,
        loglevel = %cfg.server.loglevel
    );

    let storage = roster::db::UserStorage::connect_lazy(&cfg.database.url())?;

    if cfg.database.bootstrap_schema {
        match storage.init_schema().await {
            Ok(()) => info!("users schema ready"),
            Err(e) => {
                warn!(error = %e, "schema bootstrap failed; assuming the table already exists");
            }
        }
    }

    // Build axum router and serve
    let state = roster::router::RosterState::new(storage);
    let app = roster::router::roster_router(state);

    let listener = TcpListener::bind(&cfg.server.bind).await?;
    info!("HTTP server listening on {}", cfg.server.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
