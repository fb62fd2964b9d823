use crate::errors::{ApiError, ErrorResponse};
use crate::models::{StatusRecord, StatusRecordCreate};
use crate::services::StatusService;
use actix_web::{HttpResponse, get, post, web};

/// # Create Status Record
///
/// Stores a new record for `client_name` and returns it with its generated
/// `id` and `timestamp`.
///
/// ## Responses
/// - **200 OK**: the stored record
/// - **422 Unprocessable Entity**: body missing `client_name` or not JSON
/// - **500 Internal Server Error**: the document store rejected the write
///
/// ## Example Request
/// ```json
/// { "client_name": "acme" }
/// ```
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = StatusRecordCreate,
    responses(
        (status = 200, description = "Record created", body = StatusRecord),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Document store failure", body = ErrorResponse)
    ),
    tag = "Status"
)]
#[post("/status")]
pub async fn create_status(
    req: web::Json<StatusRecordCreate>,
    service: web::Data<StatusService>,
) -> Result<HttpResponse, ApiError> {
    let record = service.create(req.into_inner().client_name).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// # List Status Records
///
/// Returns up to 1000 records in the store's natural order. There is no
/// pagination; further records are not reported.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Stored records", body = [StatusRecord]),
        (status = 500, description = "Document store failure", body = ErrorResponse)
    ),
    tag = "Status"
)]
#[get("/status")]
pub async fn list_status(service: web::Data<StatusService>) -> Result<HttpResponse, ApiError> {
    let records = service.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_status).service(list_status);
}
