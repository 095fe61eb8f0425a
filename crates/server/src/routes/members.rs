use axum::{extract::State, http::StatusCode, Json};
use common::types::Message;
use service::{pagination::Page, Collection, Record};

use super::collection::{self, IdParam, ListParams, RecordBody};
use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

pub async fn list_members(
    State(state): State<ServerState>,
    params: ListParams,
) -> Result<Json<Page<Record>>, JsonApiError> {
    collection::list(&state, Collection::Members, params).await
}

pub async fn add_member(
    State(state): State<ServerState>,
    body: RecordBody,
) -> Result<(StatusCode, Json<Message>), JsonApiError> {
    collection::create(&state, Collection::Members, body).await
}

pub async fn update_member(
    State(state): State<ServerState>,
    id: IdParam,
    body: RecordBody,
) -> Result<Json<Message>, JsonApiError> {
    collection::update(&state, Collection::Members, id, body).await
}

pub async fn delete_member(
    State(state): State<ServerState>,
    id: IdParam,
) -> Result<Json<Message>, JsonApiError> {
    collection::delete(&state, Collection::Members, id).await
}

pub async fn get_member_info(
    State(state): State<ServerState>,
    id: IdParam,
) -> Result<Json<Record>, JsonApiError> {
    collection::get(&state, Collection::Members, id).await
}
