use crate::models::RootMessage;
use actix_web::{HttpResponse, Responder, get};

/// # Root Check
///
/// Constant acknowledgment. Never touches the document store, so it answers
/// even while the database is unreachable.
///
/// ## Example Response
///
/// ```json
/// { "message": "Hello World" }
/// ```
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Service is accepting requests", body = RootMessage)
    ),
    tag = "Root"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootMessage::hello())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(root);
}
