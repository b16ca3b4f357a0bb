mod product;

pub use self::product::{DynProductGrpcClient, ProductGrpcClientTrait};
