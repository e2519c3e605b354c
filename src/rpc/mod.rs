// ============================================================================
// RPC Boundary
// ============================================================================
//
// - messages        - prost wire messages
// - convert         - wire ↔ domain conversions (validation happens here)
// - status          - domain error → tonic::Status mapping
// - catalog_handler - product RPCs
// - user_handler    - user / user-context RPCs
//
// Binding the handlers to a transport is left to the server wiring.
//
// ============================================================================

pub mod messages;
mod convert;
mod status;
pub mod catalog_handler;
pub mod user_handler;

pub use catalog_handler::CatalogHandler;
pub use user_handler::UserHandler;

use std::time::Instant;

use tonic::{Response, Status};

use crate::metrics::Metrics;

/// Record metrics for one finished RPC and wrap a success in a Response.
fn observe<T>(
    metrics: &Metrics,
    method: &str,
    start: Instant,
    result: Result<T, Status>,
) -> Result<Response<T>, Status> {
    let code = match &result {
        Ok(_) => "Ok".to_string(),
        Err(status) => format!("{:?}", status.code()),
    };
    metrics.record_rpc(method, &code, start.elapsed().as_secs_f64());

    match result {
        Ok(message) => Ok(Response::new(message)),
        Err(status) => {
            tracing::debug!(method = method, code = %code, detail = status.message(), "RPC failed");
            Err(status)
        }
    }
}
