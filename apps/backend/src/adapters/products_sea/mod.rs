//! SeaORM adapter for the products table.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::products;

pub mod dto;

pub use dto::ProductCreate;

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<products::Model>, sea_orm::DbErr> {
    products::Entity::find()
        .order_by_asc(products::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    product_id: i64,
) -> Result<Option<products::Model>, sea_orm::DbErr> {
    products::Entity::find_by_id(product_id).one(conn).await
}

pub async fn create_product<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProductCreate,
) -> Result<products::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = products::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
        price: Set(dto.price),
        image: Set(dto.image),
        qty: Set(dto.qty),
        user_id: Set(dto.user_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}
