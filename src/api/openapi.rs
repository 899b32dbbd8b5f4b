use utoipa::OpenApi;

use super::handlers::{health, resources};

/// The `OpenAPI` document served at `/api-docs/openapi.json` and rendered by
/// the Swagger UI. Add new endpoints to `paths(...)` so they stay documented.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        resources::create_resource,
        resources::list_resources,
        resources::get_resource,
        resources::update_resource,
        resources::delete_resource,
    ),
    components(schemas(
        health::Health,
        resources::Resource,
        resources::ResourcePage,
        resources::ResourcePayload,
        resources::Status,
    )),
    tags(
        (name = "resources", description = "Resource management API"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;
