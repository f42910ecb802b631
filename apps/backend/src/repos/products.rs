use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::adapters::products_sea as products_adapter;
use crate::adapters::products_sea::ProductCreate;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image: Option<String>,
    pub qty: i32,
    pub user_id: i64,
    pub created_at: time::OffsetDateTime,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, ordered by id.
    async fn find_products(&self) -> Result<Vec<Product>, DomainError>;

    /// The product with this id, or `NotFound(Product)`.
    async fn get_product(&self, id: i64) -> Result<Product, DomainError>;

    /// Insert a product; an unknown owner is `Conflict(ForeignKey)`.
    async fn create_product(&self, dto: ProductCreate) -> Result<Product, DomainError>;
}

pub struct SeaProductRepository {
    db: DatabaseConnection,
}

impl SeaProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaProductRepository {
    async fn find_products(&self) -> Result<Vec<Product>, DomainError> {
        let products = products_adapter::find_all(&self.db).await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    async fn get_product(&self, id: i64) -> Result<Product, DomainError> {
        products_adapter::find_by_id(&self.db, id)
            .await?
            .map(Product::from)
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Product, format!("Product {id} not found"))
            })
    }

    async fn create_product(&self, dto: ProductCreate) -> Result<Product, DomainError> {
        let product = products_adapter::create_product(&self.db, dto).await?;
        Ok(Product::from(product))
    }
}

impl From<crate::entities::products::Model> for Product {
    fn from(model: crate::entities::products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            image: model.image,
            qty: model.qty,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}
