mod product;

pub use self::product::ProductGrpcClientService;

use crate::config::Config;
use anyhow::{Context, Result};
use genproto::product::product_service_client::ProductServiceClient;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

#[derive(Clone)]
pub struct GrpcClients {
    pub product: ProductServiceClient<Channel>,
}

impl GrpcClients {
    pub async fn init(config: &Config) -> Result<Self> {
        let product_channel = Self::connect(config.product_addr.clone(), "product-service").await?;

        Ok(Self {
            product: ProductServiceClient::new(product_channel),
        })
    }

    async fn connect(addr: String, service: &str) -> Result<Channel> {
        let endpoint = Endpoint::from_shared(addr.clone())
            .with_context(|| format!("Invalid gRPC address for {service}: {addr}"))?;

        let configured_endpoint = endpoint
            .connect_timeout(Duration::from_secs(3))
            .timeout(Duration::from_secs(10));

        configured_endpoint
            .connect()
            .await
            .with_context(|| format!("Failed to connect to {service} at {addr}"))
    }
}
