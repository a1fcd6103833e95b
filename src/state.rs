use std::sync::Arc;

use crate::services::ProductService;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductService>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductService>) -> Self {
        Self { products }
    }
}
