use anyhow::{Context, Result};
use genproto::product::product_service_server::ProductServiceServer;
use product::{
    abstract_trait::DynProductRepository, config::Config, handler::ProductServiceImpl,
    repository::ProductRepository,
};
use shared::utils::init_logger;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logger("info");

    let config = Config::init().context("Failed to load configuration")?;
    let addr = config.grpc_addr;

    let repository = Arc::new(ProductRepository::new()) as DynProductRepository;
    let service = ProductServiceImpl::new(repository);

    info!("📡 Starting product gRPC server on {addr}");

    Server::builder()
        .add_service(ProductServiceServer::new(service))
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .with_context(|| format!("gRPC server failed on {addr}"))?;

    info!("✅ Product server shutdown complete.");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 Shutdown signal received (Ctrl+C)."),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }
}
