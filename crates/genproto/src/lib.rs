pub mod product {
    include!("gen/product.rs");
}
