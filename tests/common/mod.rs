use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use product_api::{
    dto::products::ProductPayload,
    error::AppResult,
    models::Product,
    routes::create_router,
    services::{ProductService, product_not_found},
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

/// Keeps products in a vector and hands out ids the way a sequence would.
#[derive(Default)]
pub struct InMemoryProductService {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    items: Vec<Product>,
}

#[async_trait]
impl ProductService for InMemoryProductService {
    async fn list_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.inner.lock().unwrap().items.clone())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let store = self.inner.lock().unwrap();
        Ok(store.items.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, payload: ProductPayload) -> AppResult<Product> {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: store.next_id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            quantity: payload.quantity,
            created_at: now,
            updated_at: now,
        };
        store.items.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, payload: ProductPayload) -> AppResult<Product> {
        let mut store = self.inner.lock().unwrap();
        let product = store
            .items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| product_not_found(id))?;
        product.name = payload.name;
        product.description = payload.description;
        product.price = payload.price;
        product.quantity = payload.quantity;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut store = self.inner.lock().unwrap();
        let before = store.items.len();
        store.items.retain(|p| p.id != id);
        if store.items.len() == before {
            return Err(product_not_found(id));
        }
        Ok(())
    }
}

pub fn app() -> Router {
    create_router(AppState::new(Arc::new(InMemoryProductService::default())))
}

/// Send one request through the router and decode the JSON body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
