use anyhow::Result;
use risorse::api::ApiDoc;
use utoipa::OpenApi;

/// Dumps the OpenAPI document as pretty JSON, for diffing in CI.
fn main() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ApiDoc::openapi())?);
    Ok(())
}
