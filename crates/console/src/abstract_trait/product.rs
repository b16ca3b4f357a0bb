use crate::domain::{
    requests::product::{CreateProductRequest, ListProductsQuery, UpdateProductRequest},
    response::{
        api::ApiResponse,
        product::{DeleteResponse, ProductPage, ProductResponse},
    },
};
use async_trait::async_trait;
use shared::errors::RpcError;
use std::sync::Arc;

pub type DynProductGrpcClient = Arc<dyn ProductGrpcClientTrait + Send + Sync>;

/// The five product operations, one RPC per call. Implementations hold no
/// per-call state; every invocation is a fresh round-trip.
#[async_trait]
pub trait ProductGrpcClientTrait {
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, RpcError>;
    async fn get(&self, id: i64) -> Result<ProductResponse, RpcError>;
    async fn update(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, RpcError>;
    /// Completion and the server's own success flag are reported
    /// separately; a completed call may still carry `success: false`.
    async fn delete(&self, id: i64) -> Result<DeleteResponse, RpcError>;
    /// A page past the end is not an error: `data` comes back empty and
    /// `total` still holds the true count.
    async fn list(&self, query: &ListProductsQuery) -> Result<ProductPage, RpcError>;
}
