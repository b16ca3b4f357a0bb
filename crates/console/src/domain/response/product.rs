use crate::domain::response::pagination::Pagination;
use genproto::product::{
    DeleteProductResponse as DeleteProductResponseProto, Product as ProductProto,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

// proto to response
impl From<ProductProto> for ProductResponse {
    fn from(value: ProductProto) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

/// Outcome of a delete call that completed: the call can still report a
/// logical failure through `success`, with `message` explaining it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl From<DeleteProductResponseProto> for DeleteResponse {
    fn from(value: DeleteProductResponseProto) -> Self {
        DeleteResponse {
            success: value.success,
            message: value.message,
        }
    }
}

/// One page of products plus the cursor it was fetched with.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductPage {
    pub data: Vec<ProductResponse>,
    pub pagination: Pagination,
}
