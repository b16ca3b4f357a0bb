use crate::abstract_trait::DynProductRepository;
use crate::model::NewProduct;
use genproto::product::{
    CreateProductRequest, DeleteProductRequest, DeleteProductResponse, GetProductRequest,
    ListProductsRequest, ListProductsResponse, ProductResponse, UpdateProductRequest,
    product_service_server::ProductService,
};
use tonic::{Request, Response, Status};
use tracing::info;

#[derive(Clone)]
pub struct ProductServiceImpl {
    pub repository: DynProductRepository,
}

impl ProductServiceImpl {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[tonic::async_trait]
impl ProductService for ProductServiceImpl {
    async fn create_product(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let req = request.into_inner();
        info!("Handling gRPC request: CreateProduct ({})", req.name);

        let product = self
            .repository
            .create(NewProduct {
                name: req.name,
                description: req.description,
                price: req.price,
                quantity: req.quantity,
            })
            .await;

        let reply = ProductResponse {
            product: Some(product.into()),
            message: "Product created".into(),
        };

        Ok(Response::new(reply))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let req = request.into_inner();
        info!("Handling gRPC request: GetProduct ({})", req.id);

        match self.repository.find_by_id(req.id).await {
            Some(product) => Ok(Response::new(ProductResponse {
                product: Some(product.into()),
                message: "Product found".into(),
            })),
            None => Err(Status::not_found(format!(
                "Product not found with id: {}",
                req.id
            ))),
        }
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<ProductResponse>, Status> {
        let req = request.into_inner();
        info!("Handling gRPC request: UpdateProduct ({})", req.id);

        let updated = self
            .repository
            .update(
                req.id,
                NewProduct {
                    name: req.name,
                    description: req.description,
                    price: req.price,
                    quantity: req.quantity,
                },
            )
            .await;

        match updated {
            Some(product) => Ok(Response::new(ProductResponse {
                product: Some(product.into()),
                message: "Product updated".into(),
            })),
            None => Err(Status::not_found(format!(
                "Product not found with id: {}",
                req.id
            ))),
        }
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductResponse>, Status> {
        let req = request.into_inner();
        info!("Handling gRPC request: DeleteProduct ({})", req.id);

        // A missing product is a normal completion with success unset, not
        // a status error.
        let reply = if self.repository.delete(req.id).await {
            DeleteProductResponse {
                success: true,
                message: "Product deleted".into(),
            }
        } else {
            DeleteProductResponse {
                success: false,
                message: "Product not found".into(),
            }
        };

        Ok(Response::new(reply))
    }

    async fn list_products(
        &self,
        request: Request<ListProductsRequest>,
    ) -> Result<Response<ListProductsResponse>, Status> {
        let req = request.into_inner();

        let page = if req.page > 0 { req.page } else { 0 };
        let size = if req.size > 0 { req.size } else { 10 };

        info!("Handling gRPC request: ListProducts (page: {page}, size: {size})");

        let (products, total) = self.repository.find_page(page, size).await;

        let reply = ListProductsResponse {
            products: products.into_iter().map(Into::into).collect(),
            total,
        };

        Ok(Response::new(reply))
    }
}
