pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod telemetry;
