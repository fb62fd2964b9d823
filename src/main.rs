use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use status_check_api::config::Config;
use status_check_api::db::mongo::MongoStore;
use status_check_api::openapi::ApiDoc;
use status_check_api::routes;
use status_check_api::services::StatusService;
use status_check_api::telemetry::init_tracing;
use std::sync::Arc;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Status Check Service Entry Point
///
/// - Loads `.env` (if present) and the environment configuration
/// - Opens the MongoDB client once and shares it across all workers
/// - Serves the API under `/api` with a permissive CORS policy
/// - Serves Swagger UI at `/swagger-ui/` and the spec at `/api-docs/openapi.json`
/// - Closes the MongoDB client after the server stops
///
/// Missing `MONGO_URL` or `DB_NAME` aborts start-up before anything binds.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;

    let store = MongoStore::connect(&config).await.map_err(|e| {
        error!(error = %e, "failed to connect to MongoDB");
        std::io::Error::other(e)
    })?;
    let service = StatusService::new(Arc::new(store));

    info!(host = %config.host, port = config.port, "starting HTTP server");

    let app_service = service.clone();
    let server = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(routes::cors())
            .wrap(Logger::default())
            .app_data(Data::new(app_service.clone()))
            .configure(routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port));

    let result = match server {
        Ok(server) => server.run().await,
        Err(e) => {
            error!(error = %e, "failed to bind HTTP listener");
            Err(e)
        }
    };

    service.shutdown().await;
    result
}
