use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use prometheus::{Encoder, Registry, TextEncoder};
use serde::Serialize;
use std::sync::Arc;

use crate::config::StorageBackend;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    storage: &'static str,
}

impl HealthReport {
    fn new(storage: StorageBackend) -> Self {
        Self {
            status: "healthy",
            service: "catalog-service",
            version: env!("CARGO_PKG_VERSION"),
            storage: storage.as_str(),
        }
    }
}

/// Start the metrics HTTP server
/// This should be called in a separate thread/runtime to avoid conflicts
pub async fn start_metrics_server(
    registry: Arc<Registry>,
    storage: StorageBackend,
    port: u16,
) -> std::io::Result<()> {
    tracing::info!(
        storage = storage.as_str(),
        "📊 Starting metrics server on http://0.0.0.0:{}/metrics",
        port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(registry.clone()))
            .app_data(web::Data::new(storage))
            .route("/metrics", web::get().to(metrics_handler))
            .route("/health", web::get().to(health_handler))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

async fn metrics_handler(registry: web::Data<Arc<Registry>>) -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}

async fn health_handler(storage: web::Data<StorageBackend>) -> impl Responder {
    HttpResponse::Ok().json(HealthReport::new(**storage))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_report_names_storage_backend() {
        let body = serde_json::to_value(HealthReport::new(StorageBackend::Scylla)).unwrap();

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "catalog-service");
        assert_eq!(body["storage"], "scylla");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
