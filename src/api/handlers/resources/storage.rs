//! SQL storage for the `resources` table.
//!
//! Thin pass-through: every function is one statement (the listing is a
//! fetch plus a count the handler runs concurrently). Timestamps are
//! formatted by the database so rows map straight onto the response DTO.
//! Failures surface as [`ApiError`] via the single `From<sqlx::Error>`
//! classification.

use sqlx::{PgPool, Row, postgres::PgRow};

use super::types::{Resource, ResourceInput, Status};
use crate::api::error::ApiError;

const RESOURCE_COLUMNS: &str = r#"
    id,
    name,
    description,
    status,
    priority,
    to_char(created_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
    to_char(updated_at AT TIME ZONE 'utc', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at
"#;

fn resource_from_row(row: &PgRow) -> Resource {
    let status: String = row.get("status");

    Resource {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        // The CHECK constraint only admits known values.
        status: Status::parse(&status).unwrap_or_default(),
        priority: row.get("priority"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Builds the ILIKE pattern for a substring match, escaping the LIKE
/// metacharacters so the filter stays literal.
pub(super) fn like_pattern(name: &str) -> String {
    let escaped = name
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Inserts a new resource. `priority` must already carry the caller-applied
/// default; an omitted status falls back to the store default.
pub(super) async fn insert_resource(
    pool: &PgPool,
    input: &ResourceInput,
) -> Result<Resource, ApiError> {
    let query = format!(
        r"
        INSERT INTO resources (name, description, status, priority)
        VALUES ($1, $2, COALESCE($3, 'ACTIVE'), $4)
        RETURNING {RESOURCE_COLUMNS}
        "
    );
    let row = sqlx::query(&query)
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.status.map(Status::as_str))
        .bind(input.priority)
        .fetch_one(pool)
        .await?;

    Ok(resource_from_row(&row))
}

/// Fetches a single resource by id; `None` when no row matches.
pub(super) async fn fetch_resource(pool: &PgPool, id: i64) -> Result<Option<Resource>, ApiError> {
    let query = format!("SELECT {RESOURCE_COLUMNS} FROM resources WHERE id = $1");
    let row = sqlx::query(&query).bind(id).fetch_optional(pool).await?;

    Ok(row.as_ref().map(resource_from_row))
}

/// Applies a partial update and bumps `updated_at`. Omitted fields keep
/// their stored value; a missing row surfaces as `NotFound`.
pub(super) async fn update_resource(
    pool: &PgPool,
    id: i64,
    input: &ResourceInput,
) -> Result<Resource, ApiError> {
    let query = format!(
        r"
        UPDATE resources
        SET
            name = $1,
            description = COALESCE($2, description),
            status = COALESCE($3, status),
            priority = COALESCE($4, priority),
            updated_at = now()
        WHERE id = $5
        RETURNING {RESOURCE_COLUMNS}
        "
    );
    let row = sqlx::query(&query)
        .bind(&input.name)
        .bind(input.description.as_deref())
        .bind(input.status.map(Status::as_str))
        .bind(input.priority)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(resource_from_row).ok_or(ApiError::NotFound)
}

/// Hard-deletes a resource; a missing row surfaces as `NotFound`.
pub(super) async fn delete_resource(pool: &PgPool, id: i64) -> Result<(), ApiError> {
    let row = sqlx::query("DELETE FROM resources WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(|_| ()).ok_or(ApiError::NotFound)
}

/// Fetches one page of resources ordered by id, optionally filtered by a
/// case-insensitive substring match on `name`.
pub(super) async fn fetch_resource_page(
    pool: &PgPool,
    name: Option<&str>,
    offset: i64,
    limit: i64,
) -> Result<Vec<Resource>, ApiError> {
    let query = format!(
        r"
        SELECT {RESOURCE_COLUMNS}
        FROM resources
        WHERE ($1::TEXT IS NULL OR name ILIKE $1)
        ORDER BY id
        OFFSET $2
        LIMIT $3
        "
    );
    let pattern = name.map(like_pattern);
    let rows = sqlx::query(&query)
        .bind(pattern.as_deref())
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(resource_from_row).collect())
}

/// Counts resources under the same filter as [`fetch_resource_page`].
pub(super) async fn count_resources(pool: &PgPool, name: Option<&str>) -> Result<i64, ApiError> {
    let pattern = name.map(like_pattern);
    let row = sqlx::query(
        r"
        SELECT COUNT(*) AS total
        FROM resources
        WHERE ($1::TEXT IS NULL OR name ILIKE $1)
        ",
    )
    .bind(pattern.as_deref())
    .fetch_one(pool)
    .await?;

    Ok(row.get("total"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_in_wildcards() {
        assert_eq!(like_pattern("db"), "%db%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }
}
