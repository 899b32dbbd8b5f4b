//! Request/response types for the resource API.
//!
//! These payloads are shared between handlers and `OpenAPI` generation. All
//! JSON field names are camelCase.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resource lifecycle state as stored in the `status` column.
#[derive(Debug, Deserialize, Serialize, ToSchema, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    /// Returns the canonical string representation used in API payloads and SQL writes.
    /// The returned value must match the `status` CHECK constraint values in the database.
    pub(super) fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    /// Exact-match parse of an incoming status value.
    pub(super) fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ACTIVE" => Some(Self::Active),
            "INACTIVE" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Incoming create/update body, before validation. `status` stays a plain
/// string so an unknown value produces a field error instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResourcePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(example = "ACTIVE")]
    pub status: Option<String>,
    #[schema(minimum = 1, maximum = 5, example = 3)]
    pub priority: Option<i64>,
}

/// Sanitized output of validation: trimmed strings, parsed enum, checked range.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct ResourceInput {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Web Server")]
    pub name: String,
    #[schema(example = "A production web server")]
    pub description: Option<String>,
    pub status: Status,
    #[schema(minimum = 1, maximum = 5, example = 3)]
    pub priority: i32,
    #[schema(example = "2024-01-22T14:48:00Z")]
    pub created_at: String,
    #[schema(example = "2024-01-22T14:48:00Z")]
    pub updated_at: String,
}

/// One page of the listing plus the pagination bookkeeping.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePage {
    pub data: Vec<Resource>,
    pub total_records: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

/// Raw listing query parameters. Numbers arrive as strings; defaults and
/// clamping are applied in the handler.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub name: Option<String>,
}
