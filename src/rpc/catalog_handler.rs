use std::sync::Arc;
use std::time::Instant;

use tonic::{Request, Response, Status};

use crate::domain::catalog::{CreateProduct, ProductUseCases};
use crate::metrics::Metrics;
use super::messages as pb;
use super::observe;

// ============================================================================
// Catalog Handler - catalog.v1.ProductService
// ============================================================================
//
// Translates wire requests into use case calls and results back into wire
// responses. No business rules live here.
//
// ============================================================================

pub struct CatalogHandler {
    use_cases: Arc<ProductUseCases>,
    metrics: Arc<Metrics>,
}

impl CatalogHandler {
    pub fn new(use_cases: Arc<ProductUseCases>, metrics: Arc<Metrics>) -> Self {
        Self { use_cases, metrics }
    }

    pub async fn list_products(
        &self,
        _request: Request<pb::ListProductsRequest>,
    ) -> Result<Response<pb::ListProductsResponse>, Status> {
        let start = Instant::now();

        let result = match self.use_cases.list_products().await {
            Ok(products) => Ok(pb::ListProductsResponse {
                products: products.into_iter().map(pb::Product::from).collect(),
            }),
            Err(e) => Err(Status::from(e)),
        };

        observe(&self.metrics, "ListProducts", start, result)
    }

    pub async fn create_product(
        &self,
        request: Request<pb::CreateProductRequest>,
    ) -> Result<Response<pb::Product>, Status> {
        let start = Instant::now();

        let result = match CreateProduct::try_from(request.into_inner()) {
            Ok(command) => self
                .use_cases
                .create_product(command)
                .await
                .map(pb::Product::from)
                .map_err(Status::from),
            Err(e) => Err(Status::from(e)),
        };

        observe(&self.metrics, "CreateProduct", start, result)
    }

    pub async fn get_product(
        &self,
        request: Request<pb::GetProductRequest>,
    ) -> Result<Response<pb::Product>, Status> {
        let start = Instant::now();
        let id = request.into_inner().id;

        let result = match self.use_cases.get_product(&id).await {
            Ok(Some(product)) => Ok(pb::Product::from(product)),
            Ok(None) => Err(Status::not_found(format!("product not found: {id}"))),
            Err(e) => Err(Status::from(e)),
        };

        observe(&self.metrics, "GetProduct", start, result)
    }

    pub async fn update_product(
        &self,
        _request: Request<pb::UpdateProductRequest>,
    ) -> Result<Response<pb::Product>, Status> {
        let start = Instant::now();

        let result = self
            .use_cases
            .update_product()
            .await
            .map(pb::Product::from)
            .map_err(Status::from);

        observe(&self.metrics, "UpdateProduct", start, result)
    }

    pub async fn delete_product(
        &self,
        request: Request<pb::DeleteProductRequest>,
    ) -> Result<Response<pb::DeleteProductResponse>, Status> {
        let start = Instant::now();
        let id = request.into_inner().id;

        let result = self
            .use_cases
            .delete_product(&id)
            .await
            .map(|()| pb::DeleteProductResponse {})
            .map_err(Status::from);

        observe(&self.metrics, "DeleteProduct", start, result)
    }
}
