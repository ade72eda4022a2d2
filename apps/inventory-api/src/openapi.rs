//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::{health, info};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        description = "REST API for managing inventory items",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        info::root,
        info::team,
        health::readiness_check,
        axum_helpers::server::health::health_handler,
    ),
    components(schemas(
        info::RootResponse,
        info::TeamResponse,
        info::TeamMember,
        axum_helpers::HealthResponse,
        axum_helpers::ErrorResponse
    )),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Inventory item management"),
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Info", description = "Service banner and team roster")
    )
)]
pub struct ApiDoc;
