use std::fmt;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use prometheus_client::registry::Registry;

use crate::config::Config;
use crate::di::DependenciesInject;
use crate::service::GrpcClients;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("registry", &"Arc<Mutex<Registry>>")
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let clients = GrpcClients::init(config)
            .await
            .context("Failed to initialize gRPC clients")?;

        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(clients, &mut registry);

        Ok(Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
        })
    }
}
