use crate::GIT_COMMIT_HASH;
use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use sqlx::{Connection, PgPool};
use tracing::{Instrument, debug, error, info_span};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Health {
    commit: String,
    name: String,
    version: String,
    database: String,
}

/// Round-trips a pooled connection to confirm the database still answers.
async fn ping_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let acquire_span = info_span!(
        "db.acquire",
        db.system = "postgresql",
        db.operation = "ACQUIRE"
    );
    let mut conn = pool.acquire().instrument(acquire_span).await?;

    let ping_span = info_span!("db.ping", db.system = "postgresql", db.operation = "PING");
    conn.ping().instrument(ping_span).await
}

#[utoipa::path(
    get,
    path= "/health",
    responses (
        (status = 200, description = "Database is healthy", body = Health),
        (status = 503, description = "Database is unhealthy", body = Health)
    ),
    tag= "health"
)]
/// Reports build metadata and database connectivity; the `X-App` response
/// header carries `name:version:short-commit`.
pub async fn health(pool: Extension<PgPool>) -> impl IntoResponse {
    let database_ok = match ping_database(&pool).await {
        Ok(()) => {
            debug!("Database connection is healthy");
            true
        }
        Err(err) => {
            error!("Database health check failed: {err}");
            false
        }
    };

    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database_ok { "ok" } else { "error" }.to_string(),
    };

    let mut headers = HeaderMap::new();
    let short_commit = health.commit.get(..7).unwrap_or_default();
    match format!("{}:{}:{short_commit}", health.name, health.version).parse() {
        Ok(x_app) => {
            headers.insert("X-App", x_app);
        }
        Err(err) => error!("Failed to build X-App header: {err}"),
    }

    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, headers, Json(health))
}
