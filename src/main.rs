//! Palindrome Messages server binary
//!
//! Loads configuration, seeds the super-admin, and serves the HTTP API.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palindrome_messages::auth::hash_password;
use palindrome_messages::models::Role;
use palindrome_messages::store::NewUser;
use palindrome_messages::{create_router, spawn_cleanup_task, AppState, Config};

/// # Startup Sequence
/// 1. Load `.env` and initialize the tracing subscriber
/// 2. Load configuration from environment variables
/// 3. Build stores, token service and verdict cache
/// 4. Seed the super-admin account when credentials are configured
/// 5. Start the background expiry sweep
/// 6. Serve until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palindrome_messages=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Palindrome Messages API");

    let config = Config::from_env();
    info!(
        "Configuration loaded: env={}, port={}, cache_enabled={}, cache_ttl={}s, session_ttl={}s",
        config.app_env,
        config.server_port,
        config.cache_enabled,
        config.cache_ttl,
        config.session_ttl
    );
    if config.uses_development_secret() {
        warn!("JWT_SECRET is not set, signing tokens with the development secret");
    }

    let state = AppState::from_config(&config);
    seed_super_admin(&state, &config).await?;

    let cleanup_handle = spawn_cleanup_task(
        state.cache.clone(),
        state.sessions.clone(),
        config.cleanup_interval,
    );

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Creates the super-admin account from `SUPERADMIN_EMAIL`/`SUPERADMIN_PASSWORD`.
async fn seed_super_admin(state: &AppState, config: &Config) -> anyhow::Result<()> {
    let (Some(email), Some(password)) = (&config.super_admin_email, &config.super_admin_password)
    else {
        return Ok(());
    };

    let password_hash = hash_password(password, config.salt_rounds)
        .await
        .context("failed to hash super-admin password")?;
    let user = state
        .users
        .create(NewUser {
            name: "Super Admin".to_string(),
            email: email.clone(),
            password_hash,
            role: Role::SuperAdmin,
        })
        .await
        .context("failed to seed super-admin")?;

    info!(user_id = %user.id, email = %user.email, "super-admin seeded");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM, then aborts the expiry sweep.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Expiry sweep aborted");
}
