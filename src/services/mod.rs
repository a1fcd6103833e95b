use async_trait::async_trait;

use crate::{
    dto::products::ProductPayload,
    error::{AppError, AppResult},
    models::Product,
};

pub mod product_service;

pub use product_service::SeaOrmProductService;

/// Persistence contract the product handlers depend on.
///
/// `update` and `delete` report a missing id as [`AppError::NotFound`]
/// carrying a message meant for the client.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Product>>;

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Product>>;

    async fn create(&self, payload: ProductPayload) -> AppResult<Product>;

    async fn update(&self, id: i64, payload: ProductPayload) -> AppResult<Product>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

pub fn product_not_found(id: i64) -> AppError {
    AppError::not_found(format!("Product not found with id: {id}"))
}
