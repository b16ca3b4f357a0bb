#[derive(Debug, Clone)]
pub struct Config {
    pub product_addr: String,
}

impl Config {
    pub fn init() -> Self {
        let product_addr = std::env::var("GRPC_PRODUCT_ADDR")
            .unwrap_or_else(|_| "http://127.0.0.1:50051".to_string());

        Self { product_addr }
    }
}
