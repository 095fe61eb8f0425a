//! Handler bodies shared by the books and members resources.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use serde::Deserialize;
use service::{pagination::{Page, PageRequest}, Collection, Record};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub type ListParams = Result<Query<ListQuery>, QueryRejection>;
pub type IdParam = Result<Path<u64>, PathRejection>;
pub type RecordBody = Result<Json<Record>, JsonRejection>;

/// Ids in the path are non-negative integers; anything else matches no route.
fn record_key(id: IdParam) -> Result<i64, JsonApiError> {
    let Path(id) = id?;
    i64::try_from(id).map_err(|_| JsonApiError::route_not_found())
}

pub(crate) async fn list(
    state: &ServerState,
    collection: Collection,
    params: ListParams,
) -> Result<Json<Page<Record>>, JsonApiError> {
    let Query(q) = params?;
    let page = state.catalog.list(collection, PageRequest::new(q.page, q.limit)).await?;
    Ok(Json(page))
}

pub(crate) async fn create(
    state: &ServerState,
    collection: Collection,
    body: RecordBody,
) -> Result<(StatusCode, Json<Message>), JsonApiError> {
    let Json(record) = body?;
    state.catalog.create(collection, record).await?;
    Ok((
        StatusCode::CREATED,
        Json(Message::new(format!("{} added successfully!", collection.label()))),
    ))
}

pub(crate) async fn update(
    state: &ServerState,
    collection: Collection,
    id: IdParam,
    body: RecordBody,
) -> Result<Json<Message>, JsonApiError> {
    let id = record_key(id)?;
    let Json(patch) = body?;
    state.catalog.update(collection, id, patch).await?;
    Ok(Json(Message::new(format!("{} updated successfully!", collection.label()))))
}

pub(crate) async fn delete(
    state: &ServerState,
    collection: Collection,
    id: IdParam,
) -> Result<Json<Message>, JsonApiError> {
    let id = record_key(id)?;
    state.catalog.delete(collection, id).await?;
    Ok(Json(Message::new(format!("{} deleted successfully!", collection.label()))))
}

pub(crate) async fn get(
    state: &ServerState,
    collection: Collection,
    id: IdParam,
) -> Result<Json<Record>, JsonApiError> {
    let id = record_key(id)?;
    Ok(Json(state.catalog.get(collection, id).await?))
}
