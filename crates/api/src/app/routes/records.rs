//! Pass-through CRUD handlers shared by every record type.
//!
//! `GET /` list, `POST /` create, `GET /count`, `GET|PUT|DELETE /:id`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use stockly_core::{Entity, RecordId};
use stockly_infra::RecordStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// A record type exposed over HTTP.
pub trait Resource: Entity + Serialize {
    fn store(services: &AppServices) -> &Arc<dyn RecordStore<Self>>;
}

pub fn router<E>() -> Router
where
    E: Resource,
    E::Draft: DeserializeOwned,
{
    Router::new()
        .route("/", get(list::<E>).post(create::<E>))
        .route("/count", get(count::<E>))
        .route("/:id", get(fetch::<E>).put(replace::<E>).delete(remove::<E>))
}

fn parse_id<E: Entity>(raw: &str) -> Result<E::Id, axum::response::Response> {
    raw.parse::<E::Id>().map_err(errors::domain_error_to_response)
}

pub async fn list<E: Resource>(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match E::store(&services).find_all().await {
        Ok(items) => (StatusCode::OK, Json(dto::items_json(&items))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create<E>(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<E::Draft>, JsonRejection>,
) -> axum::response::Response
where
    E: Resource,
    E::Draft: DeserializeOwned,
{
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match E::store(&services).create(body).await {
        Ok(record) => {
            tracing::info!(entity = E::NAME, id = record.id().get(), "record created");
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn count<E: Resource>(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match E::store(&services).count().await {
        Ok(n) => (StatusCode::OK, Json(dto::count_json(n))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn fetch<E: Resource>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id::<E>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match E::store(&services).get(id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn replace<E>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<E::Draft>, JsonRejection>,
) -> axum::response::Response
where
    E: Resource,
    E::Draft: DeserializeOwned,
{
    let id = match parse_id::<E>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match E::store(&services).update(E::from_draft(id, body)).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn remove<E: Resource>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id::<E>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match E::store(&services).delete(id).await {
        Ok(()) => {
            tracing::info!(entity = E::NAME, id = id.get(), "record deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
