use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DbErr, EntityTrait, QueryOrder, Set};

use crate::{
    db::OrmConn,
    dto::products::ProductPayload,
    entity::products::{ActiveModel, Column, Entity as Products},
    error::AppResult,
    models::Product,
    services::{ProductService, product_not_found},
};

pub struct SeaOrmProductService {
    orm: OrmConn,
}

impl SeaOrmProductService {
    pub fn new(orm: OrmConn) -> Self {
        Self { orm }
    }
}

#[async_trait]
impl ProductService for SeaOrmProductService {
    async fn list_all(&self) -> AppResult<Vec<Product>> {
        let items = Products::find()
            .order_by_asc(Column::Id)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(Product::from)
            .collect();
        Ok(items)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let product = Products::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(Product::from);
        Ok(product)
    }

    async fn create(&self, payload: ProductPayload) -> AppResult<Product> {
        let active = ActiveModel {
            id: NotSet,
            name: Set(payload.name),
            description: Set(payload.description),
            price: Set(payload.price),
            quantity: Set(payload.quantity),
            created_at: NotSet,
            updated_at: NotSet,
        };
        let product = active.insert(&self.orm).await?;
        tracing::info!(product_id = product.id, "product created");

        Ok(product.into())
    }

    async fn update(&self, id: i64, payload: ProductPayload) -> AppResult<Product> {
        let existing = match Products::find_by_id(id).one(&self.orm).await? {
            Some(p) => p,
            None => return Err(product_not_found(id)),
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(payload.name);
        active.description = Set(payload.description);
        active.price = Set(payload.price);
        active.quantity = Set(payload.quantity);
        active.updated_at = Set(Utc::now().into());

        // The row can vanish between the lookup and the write.
        let product = active.update(&self.orm).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => product_not_found(id),
            err => err.into(),
        })?;
        tracing::info!(product_id = product.id, "product updated");

        Ok(product.into())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = Products::delete_by_id(id).exec(&self.orm).await?;

        if result.rows_affected == 0 {
            return Err(product_not_found(id));
        }
        tracing::info!(product_id = id, "product deleted");

        Ok(())
    }
}
