use std::sync::Arc;

use tonic::Request;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod domain;
mod metrics;
mod rpc;
mod store;
mod utils;

use config::{ServiceConfig, StorageBackend};
use domain::catalog::{ProductRepository, ProductUseCases};
use domain::user::{AuthUseCases, UserContextUseCases, UserRepository};
use rpc::messages as pb;
use rpc::{CatalogHandler, UserHandler};
use store::{InMemoryProductRepository, InMemoryUserRepository, ScyllaProductRepository, ScyllaUserRepository};
use utils::RetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env()?;

    // RUST_LOG wins over the configured default filter
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("🚀 Starting catalog service");
    tracing::info!(storage = ?config.storage, "Loaded configuration");

    // === 1. Repositories: the only place that knows the storage backend ===
    let (products, users) = match config.storage {
        StorageBackend::Memory => {
            let products: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
            let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
            (products, users)
        }
        StorageBackend::Scylla => {
            let session = store::scylladb::connect(&config.scylla_uri, RetryConfig::startup()).await?;
            store::scylladb::ensure_schema(&session, &config.keyspace).await?;

            let session = Arc::new(session);
            let products: Arc<dyn ProductRepository> =
                Arc::new(ScyllaProductRepository::new(session.clone()));
            let users: Arc<dyn UserRepository> = Arc::new(ScyllaUserRepository::new(session));
            (products, users)
        }
    };

    // === 2. Use cases ===
    let product_use_cases = Arc::new(ProductUseCases::new(products));
    let auth_use_cases = Arc::new(AuthUseCases::new(users.clone()));
    let context_use_cases = Arc::new(UserContextUseCases::new(users));

    // === 3. Prometheus metrics ===
    let metrics = Arc::new(metrics::Metrics::new()?);

    // Metrics HTTP server runs on its own runtime thread
    let metrics_registry = Arc::new(metrics.registry().clone());
    let metrics_port = config.metrics_port;
    let storage = config.storage;
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to build metrics runtime: {}", e);
                return;
            }
        };
        rt.block_on(async {
            if let Err(e) = metrics::start_metrics_server(metrics_registry, storage, metrics_port).await {
                tracing::error!("Metrics server error: {}", e);
            }
        });
    });

    // === 4. Handlers ===
    let catalog = CatalogHandler::new(product_use_cases, metrics.clone());
    let users = UserHandler::new(auth_use_cases, context_use_cases, metrics.clone());

    // === 5. Seed demo data (in-memory only, never into a real database) ===
    if config.storage == StorageBackend::Memory {
        seed_demo_data(&catalog, &users).await?;
    }

    tracing::info!("✅ Catalog service ready, press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    Ok(())
}

/// Drives one request through the RPCs so the demo store is not empty and a
/// broken wiring fails at boot.
async fn seed_demo_data(catalog: &CatalogHandler, users: &UserHandler) -> anyhow::Result<()> {
    let product = catalog
        .create_product(Request::new(pb::CreateProductRequest {
            name: "Contact Sensor Mini".to_string(),
            description: "Door/window contact sensor".to_string(),
            price: 2_980,
            manufacturer: "Opti".to_string(),
            installation_difficulty: "low".to_string(),
            category: "sensor".to_string(),
            strong_points: vec!["Battery lasts two years".to_string()],
            ..Default::default()
        }))
        .await?
        .into_inner();
    tracing::info!(product_id = %product.id, "Created product");

    let listed = catalog
        .list_products(Request::new(pb::ListProductsRequest {}))
        .await?
        .into_inner();
    tracing::info!(count = listed.products.len(), "Listed products");

    catalog
        .get_product(Request::new(pb::GetProductRequest { id: product.id.clone() }))
        .await?;

    let update = catalog
        .update_product(Request::new(pb::UpdateProductRequest { product: Some(product) }))
        .await;
    if let Err(status) = update {
        tracing::info!(code = ?status.code(), "UpdateProduct is not available yet");
    }

    let user = users
        .sign_up(Request::new(pb::SignUpRequest {
            email: "demo@example.com".to_string(),
            name: "Demo User".to_string(),
        }))
        .await?
        .into_inner();
    users
        .login(Request::new(pb::LoginRequest { email: user.email.clone() }))
        .await?;

    let context = users
        .save_user_context(Request::new(pb::SaveUserContextRequest {
            user_id: user.id.clone(),
            context_id: String::new(),
            residence: Some(pb::ResidenceInfo {
                residence_type: "apartment".to_string(),
                age: 10,
                layout: "2LDK".to_string(),
                ownership: "rented".to_string(),
            }),
        }))
        .await?
        .into_inner();
    users
        .get_user_context(Request::new(pb::GetUserContextRequest { user_id: user.id.clone() }))
        .await?;
    tracing::info!(user_id = %user.id, context_id = %context.id, "Signed up user with context");

    Ok(())
}
