use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListProductsQuery {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_size")]
    pub size: i32,
}

fn default_page() -> i32 {
    0
}

fn default_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub id: i64,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
}
