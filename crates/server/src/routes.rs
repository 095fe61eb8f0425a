use axum::{
    http::{header::ALLOW, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::JsonApiError;

pub mod auth;
pub mod books;
pub mod collection;
pub mod members;

pub const BANNER: &str = "Welcome to the Library Management System API!";

pub async fn index() -> &'static str {
    BANNER
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn fallback() -> JsonApiError {
    JsonApiError::route_not_found()
}

/// Replace the empty 405 body with a JSON error, keeping the `Allow` header.
async fn json_method_not_allowed(resp: Response) -> Response {
    if resp.status() != StatusCode::METHOD_NOT_ALLOWED {
        return resp;
    }
    let allow = resp.headers().get(ALLOW).cloned();
    let mut json = JsonApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(ALLOW, allow);
    }
    json
}

/// Build the full application router: public, user-facing and admin routes.
///
/// The admin gate wraps the whole router, so unmatched `/admin/` paths are
/// rejected before the fallback can answer them.
pub fn build_router(state: auth::ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(index))
        .route("/health", get(health));

    let user = Router::new()
        .route("/user/books", get(books::list_books))
        .route("/user/books/search", get(books::search_books))
        .route("/user/members/:id", get(members::get_member_info));

    let admin = Router::new()
        .route("/admin/books", get(books::list_books).post(books::add_book))
        .route("/admin/books/:id", put(books::update_book).delete(books::delete_book))
        .route("/admin/members", get(members::list_members).post(members::add_member))
        .route("/admin/members/:id", put(members::update_member).delete(members::delete_member));

    public
        .merge(user)
        .merge(admin)
        .fallback(fallback)
        .layer(middleware::map_response(json_method_not_allowed))
        .layer(middleware::from_fn_with_state(state.clone(), auth::require_admin_token))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
