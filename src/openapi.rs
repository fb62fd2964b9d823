use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers and served through Swagger UI.
///
/// # Endpoints
/// - Root check: `GET /api/`
/// - Create record: `POST /api/status`
/// - List records: `GET /api/status`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::status::create_status,
        crate::routes::status::list_status,
    ),
    components(
        schemas(
            crate::models::RootMessage,
            crate::models::StatusRecord,
            crate::models::StatusRecordCreate,
            crate::errors::ErrorResponse
        )
    ),
    tags(
        (name = "Root", description = "Liveness acknowledgment"),
        (name = "Status", description = "Create and list client status checks")
    ),
    info(
        description = "Records and lists client status checks backed by MongoDB",
        title = "Status Check API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
