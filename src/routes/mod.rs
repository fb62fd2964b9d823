use crate::errors::ApiError;
use actix_cors::Cors;
use actix_web::web;

/// # Root Check Endpoint
///
/// `GET /` answers `{"message": "Hello World"}` without touching the store.
pub mod root;

/// # Status Record Endpoints
///
/// - `POST /status`: create a record from `{"client_name": string}`
/// - `GET /status`: list up to 1000 records
pub mod status;


/// Base path every endpoint is mounted under.
pub const API_PREFIX: &str = "/api";

/// # API Route Configuration
///
/// Mounts all endpoints under [`API_PREFIX`] and turns JSON extraction
/// failures (missing fields, wrong types, bad syntax, wrong content type) into
/// [`ApiError::Validation`].
///
/// ```text
/// GET  /api/        - root check
/// POST /api/status  - create a status record
/// GET  /api/status  - list status records
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_PREFIX)
            .app_data(json_config())
            .configure(root::configure_routes)
            .configure(status::configure_routes),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}

/// Service-wide cross-origin policy: any origin, method and header, with
/// credentials allowed.
pub fn cors() -> Cors {
    Cors::permissive()
}
