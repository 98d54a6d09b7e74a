//! Plaza Server — social/institution platform backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use plaza_core::config::AppConfig;
use plaza_core::error::AppError;
use plaza_core::traits::ImageStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("PLAZA_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Plaza v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = plaza_database::connection::create_pool(&config.database).await?;
    plaza_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Image store ──────────────────────────────────────
    let image_store: Arc<dyn ImageStore> =
        Arc::new(plaza_storage::LocalImageStore::new(&config.storage.image_root).await?);
    tracing::info!(root = %config.storage.image_root, "Image store initialized");

    // ── Step 3: Realtime hub ─────────────────────────────────────
    let event_hub = Arc::new(plaza_realtime::EventHub::new(
        config.realtime.channel_capacity,
    ));

    // ── Step 4: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(plaza_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let institution_repo = Arc::new(
        plaza_database::repositories::institution::InstitutionRepository::new(db_pool.clone()),
    );
    let publication_repo = Arc::new(
        plaza_database::repositories::publication::PublicationRepository::new(db_pool.clone()),
    );
    let comment_repo = Arc::new(plaza_database::repositories::comment::CommentRepository::new(
        db_pool.clone(),
    ));
    let notification_repo = Arc::new(
        plaza_database::repositories::notification::NotificationRepository::new(db_pool.clone()),
    );

    // ── Step 5: Credentials and tokens ───────────────────────────
    let password_hasher = Arc::new(plaza_auth::password::PasswordHasher::new());
    let password_policy = Arc::new(plaza_auth::password::PasswordPolicy::new(&config.auth));
    let jwt_encoder = Arc::new(plaza_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(plaza_auth::jwt::JwtDecoder::new(&config.auth));

    // ── Step 6: Services ─────────────────────────────────────────
    let notifier: Arc<dyn plaza_core::traits::Notifier> = event_hub.clone();
    let account_policy = plaza_service::user::AccountPolicy::new(&config.bootstrap.username);

    let auth_service = Arc::new(plaza_service::auth::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_policy),
        Arc::clone(&jwt_encoder),
    ));
    let user_service = Arc::new(plaza_service::user::UserService::new(
        db_pool.clone(),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_policy),
        Arc::clone(&image_store),
        Arc::clone(&notifier),
        account_policy.clone(),
    ));
    let admin_user_service = Arc::new(plaza_service::user::AdminUserService::new(
        db_pool.clone(),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&image_store),
        Arc::clone(&notifier),
        account_policy,
    ));
    let institution_service = Arc::new(plaza_service::institution::InstitutionService::new(
        db_pool.clone(),
        Arc::clone(&institution_repo),
        Arc::clone(&user_repo),
    ));
    let publication_service = Arc::new(plaza_service::publication::PublicationService::new(
        db_pool.clone(),
        Arc::clone(&publication_repo),
        Arc::clone(&institution_repo),
    ));
    let comment_service = Arc::new(plaza_service::comment::CommentService::new(
        Arc::clone(&comment_repo),
        Arc::clone(&publication_repo),
        Arc::clone(&institution_repo),
        Arc::clone(&notification_repo),
        Arc::clone(&notifier),
    ));
    let notification_service = Arc::new(plaza_service::notification::NotificationService::new(
        Arc::clone(&notification_repo),
    ));

    // ── Step 7: Default administrator ────────────────────────────
    plaza_service::user::bootstrap::ensure_default_admin(
        &user_repo,
        &password_hasher,
        &config.bootstrap,
    )
    .await?;

    // ── Step 8: Build and start the HTTP server ──────────────────
    let app_state = plaza_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        image_store,
        event_hub,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        user_repo,
        institution_repo,
        publication_repo,
        comment_repo,
        notification_repo,
        auth_service,
        user_service,
        admin_user_service,
        institution_service,
        publication_service,
        comment_service,
        notification_service,
    };

    let app = plaza_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Plaza server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("Plaza server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
