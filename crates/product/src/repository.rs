use crate::abstract_trait::ProductRepositoryTrait;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// In-memory product store. Ids are assigned from a monotonic counter
/// starting at 1 and never reused, so listings keep insertion order.
#[derive(Debug, Default)]
pub struct ProductRepository {
    store: Mutex<ProductStore>,
}

#[derive(Debug, Default)]
struct ProductStore {
    next_id: i64,
    items: BTreeMap<i64, Product>,
}

impl ProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn create(&self, input: NewProduct) -> Product {
        let mut store = self.store.lock().await;
        store.next_id += 1;
        let product = Product::from_new(store.next_id, input);
        store.items.insert(product.id, product.clone());
        product
    }

    async fn find_by_id(&self, id: i64) -> Option<Product> {
        self.store.lock().await.items.get(&id).cloned()
    }

    async fn update(&self, id: i64, input: NewProduct) -> Option<Product> {
        let mut store = self.store.lock().await;
        let product = store.items.get_mut(&id)?;
        product.name = input.name;
        product.description = input.description;
        product.price = input.price;
        product.quantity = input.quantity;
        Some(product.clone())
    }

    async fn delete(&self, id: i64) -> bool {
        self.store.lock().await.items.remove(&id).is_some()
    }

    async fn find_page(&self, page: i32, size: i32) -> (Vec<Product>, i32) {
        let store = self.store.lock().await;
        let total = store.items.len() as i32;

        let offset = page.max(0) as usize * size.max(0) as usize;
        let data = store
            .items
            .values()
            .skip(offset)
            .take(size.max(0) as usize)
            .cloned()
            .collect();

        (data, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 9.99,
            quantity: 5,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = ProductRepository::new();

        let first = repo.create(input("first")).await;
        let second = repo.create(input("second")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = ProductRepository::new();

        let first = repo.create(input("first")).await;
        assert!(repo.delete(first.id).await);

        let second = repo.create(input("second")).await;
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn find_page_slices_in_insertion_order() {
        let repo = ProductRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(input(name)).await;
        }

        let (first_page, total) = repo.find_page(0, 2).await;
        assert_eq!(total, 3);
        assert_eq!(
            first_page.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["a", "b"]
        );

        let (second_page, total) = repo.find_page(1, 2).await;
        assert_eq!(total, 3);
        assert_eq!(
            second_page.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec!["c"]
        );
    }

    #[tokio::test]
    async fn find_page_beyond_range_is_empty_with_true_total() {
        let repo = ProductRepository::new();
        repo.create(input("only")).await;

        let (data, total) = repo.find_page(5, 10).await;
        assert!(data.is_empty());
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let repo = ProductRepository::new();
        assert!(repo.update(42, input("ghost")).await.is_none());
    }

    #[tokio::test]
    async fn delete_missing_returns_false() {
        let repo = ProductRepository::new();
        assert!(!repo.delete(42).await);
    }
}
