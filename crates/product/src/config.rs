use anyhow::{Context, Result};
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub grpc_addr: SocketAddr,
}

impl Config {
    pub fn init() -> Result<Self> {
        let raw = std::env::var("PRODUCT_GRPC_BIND")
            .unwrap_or_else(|_| "127.0.0.1:50051".to_string());

        let grpc_addr = raw.parse::<SocketAddr>().with_context(|| {
            format!("PRODUCT_GRPC_BIND must be a valid socket address, got '{raw}'")
        })?;

        Ok(Self { grpc_addr })
    }
}
