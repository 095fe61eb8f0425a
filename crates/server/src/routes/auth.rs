use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use service::CatalogService;
use tracing::warn;

use crate::errors::JsonApiError;

/// Every path under this prefix requires the admin token.
pub const ADMIN_PREFIX: &str = "/admin/";

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub admin_token: String,
}

#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService>,
    pub auth: ServerAuthConfig,
}

/// Middleware: `/admin/` requests must carry `Authorization: <admin token>` verbatim.
pub async fn require_admin_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Response {
    if !req.uri().path().starts_with(ADMIN_PREFIX) {
        return next.run(req).await;
    }

    let authorized = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|token| token == state.auth.admin_token);

    if !authorized {
        warn!(method = %req.method(), path = %req.uri().path(), "admin request rejected");
        return JsonApiError::unauthorized().into_response();
    }

    next.run(req).await
}
