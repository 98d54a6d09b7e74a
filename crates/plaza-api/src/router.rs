//! Route definitions for the Plaza HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(institution_routes())
        .merge(publication_routes())
        .merge(comment_routes())
        .merge(notification_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws", get(handlers::ws::ws_upgrade));

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// User self-service endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::get_profile))
        .route("/users/me", put(handlers::user::update_profile))
        .route("/users/me", delete(handlers::user::delete_account))
        .route("/users/me/password", put(handlers::user::change_password))
        .route("/users/me/image", put(handlers::user::upload_image))
        .route("/users/me/image", delete(handlers::user::delete_image))
        .route("/users/{id}/image", get(handlers::user::get_image))
}

/// Institution CRUD.
fn institution_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/institutions",
            post(handlers::institution::create_institution),
        )
        .route(
            "/institutions",
            get(handlers::institution::list_institutions),
        )
        .route(
            "/institutions/{id}",
            get(handlers::institution::get_institution),
        )
        .route(
            "/institutions/{id}",
            delete(handlers::institution::delete_institution),
        )
        .route(
            "/institutions/{id}/publications",
            get(handlers::publication::list_institution_publications),
        )
}

/// Publication CRUD.
fn publication_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/publications",
            post(handlers::publication::create_publication),
        )
        .route(
            "/publications/{id}",
            get(handlers::publication::get_publication),
        )
        .route(
            "/publications/{id}",
            delete(handlers::publication::delete_publication),
        )
        .route(
            "/publications/{id}/comments",
            post(handlers::comment::create_comment),
        )
        .route(
            "/publications/{id}/comments",
            get(handlers::comment::list_comments),
        )
}

/// Comment deletion.
fn comment_routes() -> Router<AppState> {
    Router::new().route("/comments/{id}", delete(handlers::comment::delete_comment))
}

/// Notification endpoints.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// Admin-only endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::admin::list_users))
        .route("/admin/users/{id}", get(handlers::admin::get_user))
        .route("/admin/users/{id}", put(handlers::admin::update_user))
        .route("/admin/users/{id}", delete(handlers::admin::delete_user))
        .route(
            "/admin/users/{id}/role",
            put(handlers::admin::change_role),
        )
        .route(
            "/admin/users/{id}/image",
            put(handlers::admin::upload_image),
        )
        .route(
            "/admin/users/{id}/image",
            delete(handlers::admin::delete_image),
        )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
