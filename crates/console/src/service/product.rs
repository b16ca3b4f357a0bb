use crate::{
    abstract_trait::ProductGrpcClientTrait,
    domain::{
        requests::product::{
            CreateProductRequest as DomainCreateProductRequest, ListProductsQuery,
            UpdateProductRequest as DomainUpdateProductRequest,
        },
        response::{
            api::ApiResponse,
            pagination::Pagination,
            product::{DeleteResponse, ProductPage, ProductResponse},
        },
    },
};
use async_trait::async_trait;
use genproto::product::{
    CreateProductRequest, DeleteProductRequest, GetProductRequest, ListProductsRequest,
    UpdateProductRequest, product_service_client::ProductServiceClient,
};
use prometheus_client::registry::Registry;
use shared::{
    errors::RpcError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tonic::{Request, transport::Channel};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct ProductGrpcClientService {
    client: Arc<Mutex<ProductServiceClient<Channel>>>,
    metrics: Metrics,
}

impl ProductGrpcClientService {
    pub fn new(client: ProductServiceClient<Channel>, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "product_client_requests",
            "Total number of requests issued by the product gRPC client",
            metrics.request_counter.clone(),
        );
        registry.register(
            "product_client_request_duration",
            "Histogram of request durations for the product gRPC client",
            metrics.request_duration.clone(),
        );

        Self {
            client: Arc::new(Mutex::new(client)),
            metrics,
        }
    }

    fn observe(&self, method: Method, status: StatusUtils, started: Instant) {
        self.metrics
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ProductGrpcClientTrait for ProductGrpcClientService {
    async fn create(
        &self,
        req: &DomainCreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, RpcError> {
        info!("Creating new product: {}", req.name);

        let method = Method::Post;
        let started = Instant::now();

        let request = Request::new(CreateProductRequest {
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            quantity: req.quantity,
        });

        let response = match self.client.lock().await.create_product(request).await {
            Ok(response) => {
                self.observe(method, StatusUtils::Success, started);
                response
            }
            Err(status) => {
                error!(
                    "gRPC create_product failed: {}: {}",
                    status.code(),
                    status.message()
                );
                self.observe(method, StatusUtils::Error, started);
                return Err(RpcError::from(status));
            }
        };

        let inner = response.into_inner();

        let product = inner.product.ok_or(RpcError::MissingData(
            "Product data is missing in gRPC response",
        ))?;

        let reply = ApiResponse {
            message: inner.message,
            data: product.into(),
        };

        info!("Product {} created", req.name);
        Ok(reply)
    }

    async fn get(&self, id: i64) -> Result<ProductResponse, RpcError> {
        info!("Fetching product by id: {id}");

        let method = Method::Get;
        let started = Instant::now();

        let request = Request::new(GetProductRequest { id });

        let response = match self.client.lock().await.get_product(request).await {
            Ok(response) => {
                self.observe(method, StatusUtils::Success, started);
                response
            }
            Err(status) => {
                error!(
                    "gRPC get_product failed: {}: {}",
                    status.code(),
                    status.message()
                );
                self.observe(method, StatusUtils::Error, started);
                return Err(RpcError::from(status));
            }
        };

        let inner = response.into_inner();

        let product = inner.product.ok_or(RpcError::MissingData(
            "Product data is missing in gRPC response",
        ))?;

        info!("Successfully fetched product {id}");
        Ok(product.into())
    }

    async fn update(
        &self,
        req: &DomainUpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, RpcError> {
        info!("Updating product: {}", req.id);

        let method = Method::Put;
        let started = Instant::now();

        let request = Request::new(UpdateProductRequest {
            id: req.id,
            name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            quantity: req.quantity,
        });

        let response = match self.client.lock().await.update_product(request).await {
            Ok(response) => {
                self.observe(method, StatusUtils::Success, started);
                response
            }
            Err(status) => {
                error!(
                    "gRPC update_product failed: {}: {}",
                    status.code(),
                    status.message()
                );
                self.observe(method, StatusUtils::Error, started);
                return Err(RpcError::from(status));
            }
        };

        let inner = response.into_inner();

        let product = inner.product.ok_or(RpcError::MissingData(
            "Product data is missing in gRPC response",
        ))?;

        let reply = ApiResponse {
            message: inner.message,
            data: product.into(),
        };

        info!("Product {} updated", req.id);
        Ok(reply)
    }

    async fn delete(&self, id: i64) -> Result<DeleteResponse, RpcError> {
        info!("Deleting product: {id}");

        let method = Method::Delete;
        let started = Instant::now();

        let request = Request::new(DeleteProductRequest { id });

        let response = match self.client.lock().await.delete_product(request).await {
            Ok(response) => {
                self.observe(method, StatusUtils::Success, started);
                response
            }
            Err(status) => {
                error!(
                    "gRPC delete_product failed: {}: {}",
                    status.code(),
                    status.message()
                );
                self.observe(method, StatusUtils::Error, started);
                return Err(RpcError::from(status));
            }
        };

        let inner = response.into_inner();

        info!("Delete of product {id} completed (success: {})", inner.success);
        Ok(inner.into())
    }

    async fn list(&self, query: &ListProductsQuery) -> Result<ProductPage, RpcError> {
        info!(
            "Retrieving products (page: {}, size: {})",
            query.page, query.size
        );

        let method = Method::Get;
        let started = Instant::now();

        let request = Request::new(ListProductsRequest {
            page: query.page,
            size: query.size,
        });

        let response = match self.client.lock().await.list_products(request).await {
            Ok(response) => {
                self.observe(method, StatusUtils::Success, started);
                response
            }
            Err(status) => {
                error!(
                    "gRPC list_products failed: {}: {}",
                    status.code(),
                    status.message()
                );
                self.observe(method, StatusUtils::Error, started);
                return Err(RpcError::from(status));
            }
        };

        let inner = response.into_inner();

        let products: Vec<ProductResponse> = inner.products.into_iter().map(Into::into).collect();
        let products_len = products.len();

        let reply = ProductPage {
            data: products,
            pagination: Pagination {
                page: query.page,
                size: query.size,
                total: inner.total,
            },
        };

        info!("Successfully fetched {products_len} products");
        Ok(reply)
    }
}
