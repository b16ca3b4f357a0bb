use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn create(&self, input: NewProduct) -> Product;
    async fn find_by_id(&self, id: i64) -> Option<Product>;
    async fn update(&self, id: i64, input: NewProduct) -> Option<Product>;
    async fn delete(&self, id: i64) -> bool;
    /// Returns one page of products in insertion order plus the total count
    /// across all pages.
    async fn find_page(&self, page: i32, size: i32) -> (Vec<Product>, i32);
}
