use std::sync::Arc;

use anyhow::Result;
use genproto::product::product_service_server::ProductServiceServer;
use prometheus_client::registry::Registry;
use product::abstract_trait::DynProductRepository;
use product::handler::ProductServiceImpl;
use product::repository::ProductRepository;
use shared::errors::RpcError;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::Code;
use tonic::transport::Server;

use console::abstract_trait::DynProductGrpcClient;
use console::config::Config;
use console::controller::{ProductDraft, ProductListController};
use console::domain::requests::product::{
    CreateProductRequest, ListProductsQuery, UpdateProductRequest,
};
use console::service::{GrpcClients, ProductGrpcClientService};

/// Serves the product backend on an ephemeral port and returns its url.
async fn spawn_backend() -> Result<String> {
    let repository: DynProductRepository = Arc::new(ProductRepository::new());
    let service = ProductServiceImpl::new(repository);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        Server::builder()
            .add_service(ProductServiceServer::new(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
    });

    Ok(format!("http://{addr}"))
}

async fn connect_adapter(product_addr: String) -> Result<DynProductGrpcClient> {
    let config = Config { product_addr };
    let clients = GrpcClients::init(&config).await?;

    let mut registry = Registry::default();
    Ok(Arc::new(ProductGrpcClientService::new(
        clients.product,
        &mut registry,
    )))
}

fn create_request(name: &str) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: format!("{name} description"),
        price: 9.99,
        quantity: 5,
    }
}

#[tokio::test]
async fn create_then_get_round_trips() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;

    let created = service
        .create(&CreateProductRequest {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            quantity: 5,
        })
        .await?;

    assert_eq!(created.message, "Product created");
    assert_eq!(created.data.name, "Widget");
    assert!(created.data.id > 0);

    let fetched = service.get(created.data.id).await?;
    assert_eq!(fetched, created.data);

    let again = service.get(created.data.id).await?;
    assert_eq!(again, fetched);

    Ok(())
}

#[tokio::test]
async fn get_missing_maps_status_to_rpc_error() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;

    let err = service.get(42).await.unwrap_err();

    match err {
        RpcError::Grpc { code, message } => {
            assert_eq!(code, Code::NotFound);
            assert_eq!(message, "Product not found with id: 42");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn list_on_empty_backend_returns_no_items() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;

    let page = service
        .list(&ListProductsQuery { page: 0, size: 10 })
        .await?;

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total, 0);
    assert_eq!(page.pagination.page, 0);
    assert_eq!(page.pagination.size, 10);

    Ok(())
}

#[tokio::test]
async fn list_slices_across_pages() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;

    for i in 0..11 {
        service
            .create(&create_request(&format!("product-{i}")))
            .await?;
    }

    let first = service
        .list(&ListProductsQuery { page: 0, size: 10 })
        .await?;
    assert_eq!(first.data.len(), 10);
    assert_eq!(first.pagination.total, 11);
    assert_eq!(first.data[0].name, "product-0");

    let second = service
        .list(&ListProductsQuery { page: 1, size: 10 })
        .await?;
    assert_eq!(second.data.len(), 1);
    assert_eq!(second.pagination.total, 11);
    assert_eq!(second.data[0].name, "product-10");

    Ok(())
}

#[tokio::test]
async fn backend_clamps_nonsensical_paging() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;

    service.create(&create_request("only")).await?;

    let page = service
        .list(&ListProductsQuery { page: -3, size: 0 })
        .await?;

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.total, 1);

    Ok(())
}

#[tokio::test]
async fn update_round_trips() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;

    let created = service.create(&create_request("Widget")).await?;

    let updated = service
        .update(&UpdateProductRequest {
            id: created.data.id,
            name: "Gadget".to_string(),
            description: "Now a gadget".to_string(),
            price: 19.99,
            quantity: 2,
        })
        .await?;

    assert_eq!(updated.message, "Product updated");
    assert_eq!(updated.data.name, "Gadget");

    let fetched = service.get(created.data.id).await?;
    assert_eq!(fetched.name, "Gadget");
    assert_eq!(fetched.price, 19.99);
    assert_eq!(fetched.quantity, 2);

    Ok(())
}

#[tokio::test]
async fn update_missing_maps_status_to_rpc_error() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;

    let err = service
        .update(&UpdateProductRequest {
            id: 7,
            name: "Ghost".to_string(),
            description: String::new(),
            price: 1.0,
            quantity: 1,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RpcError::Grpc {
            code: Code::NotFound,
            ..
        }
    ));

    Ok(())
}

#[tokio::test]
async fn delete_reports_logical_failure_for_missing_id() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;

    let resp = service.delete(999).await?;

    assert!(!resp.success);
    assert_eq!(resp.message, "Product not found");

    Ok(())
}

#[tokio::test]
async fn delete_removes_the_product_from_listings() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;

    let created = service.create(&create_request("doomed")).await?;

    let resp = service.delete(created.data.id).await?;
    assert!(resp.success);
    assert_eq!(resp.message, "Product deleted");

    let page = service
        .list(&ListProductsQuery { page: 0, size: 10 })
        .await?;
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total, 0);

    Ok(())
}

#[tokio::test]
async fn controller_drives_the_full_crud_cycle() -> Result<()> {
    let addr = spawn_backend().await?;
    let service = connect_adapter(addr).await?;
    let mut controller = ProductListController::new(service);

    controller.load().await;
    assert!(controller.state.items.is_empty());

    controller.open_create_form();
    controller.state.form.draft = ProductDraft {
        name: "Widget".to_string(),
        description: "A widget".to_string(),
        price: "9.99".to_string(),
        quantity: "5".to_string(),
    };
    controller.submit().await;

    assert!(!controller.state.form.visible);
    assert_eq!(controller.state.items.len(), 1);
    assert_eq!(controller.state.pagination.total, 1);

    // A delete the backend rejects surfaces its message and leaves the
    // listing alone.
    controller.delete(999).await;
    assert_eq!(controller.state.error.as_deref(), Some("Product not found"));
    assert_eq!(controller.state.items.len(), 1);

    let id = controller.state.items[0].id;
    controller.delete(id).await;
    assert_eq!(controller.state.error, None);
    assert!(controller.state.items.is_empty());
    assert_eq!(controller.state.pagination.total, 0);

    Ok(())
}
