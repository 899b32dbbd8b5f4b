//! # Risorse (Resource inventory API)
//!
//! `risorse` is a small CRUD service managing a single `Resource` entity
//! (name, description, status, priority) backed by PostgreSQL.
//!
//! ## HTTP surface
//!
//! - `POST /resources` creates a resource (priority defaults to 3).
//! - `GET /resources` lists resources with pagination (`page`, `limit`) and an
//!   optional case-insensitive `name` filter.
//! - `GET /resources/{id}`, `PUT /resources/{id}`, `DELETE /resources/{id}`
//!   operate on a single row by its integer id.
//! - `GET /health` reports build metadata and database connectivity.
//! - Swagger UI is served at `/api-docs`.
//!
//! ## Error envelope
//!
//! All non-2xx responses use a uniform JSON shape: `{"error": "..."}` for
//! single errors and `{"errors": [{"field", "message"}]}` for field
//! validation failures. Database constraint codes are classified once at the
//! storage boundary and mapped centrally in [`api::error`].
//!
//! The crate also ships [`sums`], a standalone exercise comparing three
//! equivalent ways of summing the integers `1..=n`.

pub mod api;
pub mod cli;
pub mod sums;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
