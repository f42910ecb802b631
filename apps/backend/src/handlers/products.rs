use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{non_blank, rfc3339};
use crate::adapters::products_sea::ProductCreate;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::{Product, ProductRepository};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    /// minor currency units
    pub price: i64,
    pub image: Option<String>,
    #[serde(default)]
    pub qty: i32,
}

#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image: Option<String>,
    pub qty: i32,
    pub user_id: i64,
    pub created_at: String,
}

impl From<Product> for ProductView {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            image: p.image,
            qty: p.qty,
            user_id: p.user_id,
            created_at: rfc3339(p.created_at),
        }
    }
}

pub struct ProductHandler {
    products: Arc<dyn ProductRepository>,
}

impl ProductHandler {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn find_products(&self) -> Result<Vec<ProductView>, AppError> {
        let products = self.products.find_products().await?;
        Ok(products.into_iter().map(ProductView::from).collect())
    }

    pub async fn get_product(&self, id: i64) -> Result<ProductView, AppError> {
        Ok(self.products.get_product(id).await?.into())
    }

    /// Create a product owned by `owner_id`.
    pub async fn create_product(
        &self,
        owner_id: i64,
        req: CreateProductRequest,
    ) -> Result<ProductView, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid(ErrorCode::InvalidName, "Product name cannot be empty"));
        }
        if req.price < 0 {
            return Err(AppError::invalid(
                ErrorCode::InvalidPrice,
                format!("Price must not be negative, got: {}", req.price),
            ));
        }
        if req.qty < 0 {
            return Err(AppError::invalid(
                ErrorCode::InvalidQty,
                format!("Quantity must not be negative, got: {}", req.qty),
            ));
        }

        let dto = ProductCreate {
            name: name.to_string(),
            description: non_blank(req.description),
            price: req.price,
            image: non_blank(req.image),
            qty: req.qty,
            user_id: owner_id,
        };
        Ok(self.products.create_product(dto).await?.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::handlers::fakes::FakeProducts;

    fn request(name: &str, price: i64, qty: i32) -> CreateProductRequest {
        CreateProductRequest {
            name: name.into(),
            description: None,
            price,
            image: Some(String::new()),
            qty,
        }
    }

    #[tokio::test]
    async fn create_assigns_owner() {
        let handler = ProductHandler::new(Arc::new(FakeProducts::default()));
        let view = handler.create_product(4, request(" Kettle ", 2599, 3)).await.unwrap();

        assert_eq!(view.name, "Kettle");
        assert_eq!(view.user_id, 4);
        assert_eq!(view.image, None);
        assert_eq!(handler.get_product(view.id).await.unwrap().price, 2599);
    }

    #[tokio::test]
    async fn create_rejects_bad_input() {
        let handler = ProductHandler::new(Arc::new(FakeProducts::default()));
        let cases = [
            (request("", 1, 1), ErrorCode::InvalidName),
            (request("Mug", -1, 1), ErrorCode::InvalidPrice),
            (request("Mug", 1, -1), ErrorCode::InvalidQty),
        ];
        for (req, expected) in cases {
            assert_eq!(handler.create_product(1, req).await.unwrap_err().code(), expected);
        }
        assert!(handler.find_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let handler = ProductHandler::new(Arc::new(FakeProducts::default()));
        assert_eq!(
            handler.get_product(1).await.unwrap_err().code(),
            ErrorCode::ProductNotFound
        );
    }
}
