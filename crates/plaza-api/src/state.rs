//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use plaza_auth::jwt::{JwtDecoder, JwtEncoder};
use plaza_auth::password::PasswordHasher;
use plaza_core::config::AppConfig;
use plaza_core::traits::ImageStore;
use plaza_realtime::EventHub;

use plaza_database::repositories::comment::CommentRepository;
use plaza_database::repositories::institution::InstitutionRepository;
use plaza_database::repositories::notification::NotificationRepository;
use plaza_database::repositories::publication::PublicationRepository;
use plaza_database::repositories::user::UserRepository;

use plaza_service::auth::AuthService;
use plaza_service::comment::CommentService;
use plaza_service::institution::InstitutionService;
use plaza_service::notification::NotificationService;
use plaza_service::publication::PublicationService;
use plaza_service::user::{AdminUserService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Profile image store.
    pub image_store: Arc<dyn ImageStore>,
    /// Realtime event hub.
    pub event_hub: Arc<EventHub>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Institution repository.
    pub institution_repo: Arc<InstitutionRepository>,
    /// Publication repository.
    pub publication_repo: Arc<PublicationRepository>,
    /// Comment repository.
    pub comment_repo: Arc<CommentRepository>,
    /// Notification repository.
    pub notification_repo: Arc<NotificationRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and login.
    pub auth_service: Arc<AuthService>,
    /// User self-service operations.
    pub user_service: Arc<UserService>,
    /// Administrative account management.
    pub admin_user_service: Arc<AdminUserService>,
    /// Institution management.
    pub institution_service: Arc<InstitutionService>,
    /// Publication management.
    pub publication_service: Arc<PublicationService>,
    /// Comment management.
    pub comment_service: Arc<CommentService>,
    /// Notification management.
    pub notification_service: Arc<NotificationService>,
}
