//! Resource CRUD endpoints.
//!
//! Each handler validates its input first (collecting every violated rule),
//! then makes at most one storage call and shapes the success response.
//! Failures are never handled locally: storage errors carry their own
//! classification and flow to the centralized mapper in [`crate::api::error`].
//!
//! Flow Overview:
//! 1) Validate body fields and the `id` path parameter.
//! 2) Apply defaults (`priority = 3` on create).
//! 3) Invoke the storage operation.
//! 4) Map success to JSON, or let `ApiError` shape the error envelope.

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use sqlx::PgPool;

use crate::api::error::ApiError;

mod storage;
mod types;
mod validate;

pub use types::{ListQuery, Resource, ResourcePage, ResourcePayload, Status};

const PRIORITY_MIN: i32 = 1;
const PRIORITY_MAX: i32 = 5;
const DEFAULT_PRIORITY: i32 = 3;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;
const PAGE_SIZE_MAX: i64 = 100;

/// Page number from the raw query value: defaults to 1, never below 1.
fn page_number(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
        .max(1)
}

/// Page size from the raw query value: defaults to 10, clamped to [1,100].
fn page_size(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, PAGE_SIZE_MAX)
}

fn total_pages(total_records: i64, page_size: i64) -> i64 {
    total_records.div_ceil(page_size)
}

#[utoipa::path(
    post,
    path = "/resources",
    request_body = ResourcePayload,
    responses(
        (status = 201, description = "Resource created.", body = Resource),
        (status = 400, description = "Validation failed or a constraint was violated.", body = String),
    ),
    tag = "resources"
)]
/// Creates a new resource and returns the stored row.
/// `priority` defaults to 3 when omitted; `status` defaults to `ACTIVE` in the store.
pub async fn create_resource(
    pool: Extension<PgPool>,
    Json(payload): Json<ResourcePayload>,
) -> impl IntoResponse {
    let mut input = match validate::resource_payload(payload) {
        Ok(input) => input,
        Err(errors) => return ApiError::Validation(errors).into_response(),
    };

    // Default priority is 3
    input.priority.get_or_insert(DEFAULT_PRIORITY);

    match storage::insert_resource(&pool, &input).await {
        Ok(resource) => (StatusCode::CREATED, Json(resource)).into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/resources",
    params(
        ("page" = Option<String>, Query, description = "Page number, defaults to 1"),
        ("limit" = Option<String>, Query, description = "Items per page, defaults to 10, capped at 100"),
        ("name" = Option<String>, Query, description = "Case-insensitive substring filter on name"),
    ),
    responses(
        (status = 200, description = "One page of resources plus pagination totals.", body = ResourcePage),
    ),
    tag = "resources"
)]
/// Lists resources with pagination and an optional name filter.
/// The page fetch and the total count run concurrently; both apply the same filter.
pub async fn list_resources(
    pool: Extension<PgPool>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let current_page = page_number(query.page.as_deref());
    let size = page_size(query.limit.as_deref());
    let name = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());
    let offset = (current_page - 1) * size;

    let (data, total_records) = match tokio::try_join!(
        storage::fetch_resource_page(&pool, name, offset, size),
        storage::count_resources(&pool, name),
    ) {
        Ok(result) => result,
        Err(err) => return err.into_response(),
    };

    let page = ResourcePage {
        data,
        total_records,
        current_page,
        total_pages: total_pages(total_records, size),
    };

    (StatusCode::OK, Json(page)).into_response()
}

#[utoipa::path(
    get,
    path = "/resources/{id}",
    params(("id" = i64, Path, description = "Resource id")),
    responses(
        (status = 200, description = "Resource detail.", body = Resource),
        (status = 400, description = "Invalid id.", body = String),
        (status = 404, description = "Resource not found."),
    ),
    tag = "resources"
)]
/// Fetches a single resource by id, returning `404` when no row matches.
pub async fn get_resource(Path(id): Path<String>, pool: Extension<PgPool>) -> impl IntoResponse {
    let id = match validate::path_id(&id) {
        Ok(id) => id,
        Err(error) => return ApiError::Validation(vec![error]).into_response(),
    };

    match storage::fetch_resource(&pool, id).await {
        Ok(Some(resource)) => (StatusCode::OK, Json(resource)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Resource not found" })),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/resources/{id}",
    request_body = ResourcePayload,
    params(("id" = i64, Path, description = "Resource id")),
    responses(
        (status = 200, description = "Resource updated.", body = Resource),
        (status = 400, description = "Validation failed or a constraint was violated.", body = String),
        (status = 404, description = "Resource not found."),
    ),
    tag = "resources"
)]
/// Applies a partial update: supplied fields replace stored values, omitted
/// ones are kept. Existence is the store's concern, not checked up front.
pub async fn update_resource(
    Path(id): Path<String>,
    pool: Extension<PgPool>,
    Json(payload): Json<ResourcePayload>,
) -> impl IntoResponse {
    let mut errors = Vec::new();

    let id = match validate::path_id(&id) {
        Ok(id) => Some(id),
        Err(error) => {
            errors.push(error);
            None
        }
    };

    let input = match validate::resource_payload(payload) {
        Ok(input) => Some(input),
        Err(mut field_errors) => {
            errors.append(&mut field_errors);
            None
        }
    };

    let (Some(id), Some(input)) = (id, input) else {
        return ApiError::Validation(errors).into_response();
    };

    match storage::update_resource(&pool, id, &input).await {
        Ok(resource) => (StatusCode::OK, Json(resource)).into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/resources/{id}",
    params(("id" = i64, Path, description = "Resource id")),
    responses(
        (status = 204, description = "Resource deleted."),
        (status = 400, description = "Invalid id.", body = String),
        (status = 404, description = "Resource not found."),
    ),
    tag = "resources"
)]
/// Hard-deletes a resource. No existence pre-check; a missing row surfaces
/// from the store as not-found.
pub async fn delete_resource(Path(id): Path<String>, pool: Extension<PgPool>) -> impl IntoResponse {
    let id = match validate::path_id(&id) {
        Ok(id) => id,
        Err(error) => return ApiError::Validation(vec![error]).into_response(),
    };

    match storage::delete_resource(&pool, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}


#[cfg(test)]
mod tests;
