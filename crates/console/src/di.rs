use std::fmt;
use std::sync::Arc;

use prometheus_client::registry::Registry;

use crate::abstract_trait::DynProductGrpcClient;
use crate::service::{GrpcClients, ProductGrpcClientService};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_clients: DynProductGrpcClient,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_clients", &"DynProductGrpcClient")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(clients: GrpcClients, registry: &mut Registry) -> Self {
        let product_clients: DynProductGrpcClient =
            Arc::new(ProductGrpcClientService::new(clients.product, registry));

        Self { product_clients }
    }
}
