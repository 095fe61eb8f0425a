use axum::{extract::{Query, State}, http::StatusCode, Json};
use common::types::Message;
use serde::Deserialize;
use service::{pagination::Page, Collection, Record};

use super::collection::{self, IdParam, ListParams, RecordBody};
use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn list_books(
    State(state): State<ServerState>,
    params: ListParams,
) -> Result<Json<Page<Record>>, JsonApiError> {
    collection::list(&state, Collection::Books, params).await
}

pub async fn add_book(
    State(state): State<ServerState>,
    body: RecordBody,
) -> Result<(StatusCode, Json<Message>), JsonApiError> {
    collection::create(&state, Collection::Books, body).await
}

pub async fn update_book(
    State(state): State<ServerState>,
    id: IdParam,
    body: RecordBody,
) -> Result<Json<Message>, JsonApiError> {
    collection::update(&state, Collection::Books, id, body).await
}

pub async fn delete_book(
    State(state): State<ServerState>,
    id: IdParam,
) -> Result<Json<Message>, JsonApiError> {
    collection::delete(&state, Collection::Books, id).await
}

/// Unpaginated search over `title` and `author`.
pub async fn search_books(
    State(state): State<ServerState>,
    params: Result<Query<SearchQuery>, axum::extract::rejection::QueryRejection>,
) -> Result<Json<Vec<Record>>, JsonApiError> {
    let Query(q) = params?;
    Ok(Json(state.catalog.search_books(&q.q).await?))
}
