//! Row factories that go through the repositories.

use backend::adapters::products_sea::ProductCreate;
use backend::adapters::users_sea::UserCreate;
use backend::auth::password::hash_password;
use backend::repos::{
    Product, ProductRepository, SeaProductRepository, SeaUserRepository, User, UserRepository,
};
use backend::state::app_state::AppState;

pub const DEFAULT_PASSWORD: &str = "password123";

pub async fn create_user(state: &AppState, name: &str, email: &str) -> User {
    let hash = hash_password(DEFAULT_PASSWORD).expect("hash should succeed");
    SeaUserRepository::new(state.db.clone())
        .create_user(UserCreate::new(name, email, hash))
        .await
        .expect("user insert should succeed")
}

pub async fn create_product(state: &AppState, owner_id: i64, name: &str, price: i64) -> Product {
    SeaProductRepository::new(state.db.clone())
        .create_product(ProductCreate::new(owner_id, name, price, 1))
        .await
        .expect("product insert should succeed")
}

pub async fn all_products(state: &AppState) -> Vec<Product> {
    SeaProductRepository::new(state.db.clone())
        .find_products()
        .await
        .expect("product listing should succeed")
}
