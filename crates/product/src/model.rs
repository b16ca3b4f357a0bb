use genproto::product::Product as ProductProto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

/// Field set for create and update, before an id is known.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

impl Product {
    pub fn from_new(id: i64, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
        }
    }
}

// model to proto
impl From<Product> for ProductProto {
    fn from(value: Product) -> Self {
        ProductProto {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
        }
    }
}
