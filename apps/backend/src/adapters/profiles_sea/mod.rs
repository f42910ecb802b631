//! SeaORM adapter for the profiles table.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::profiles;

pub mod dto;

pub use dto::ProfileUpsert;

pub async fn find_by_user_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<profiles::Model>, sea_orm::DbErr> {
    profiles::Entity::find()
        .filter(profiles::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Insert the profile, or overwrite the existing one for the same user.
///
/// One `INSERT .. ON CONFLICT (user_id) DO UPDATE`; concurrent first writes
/// for a user both succeed.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProfileUpsert,
) -> Result<profiles::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user_id = dto.user_id;

    let active = profiles::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        phone: Set(dto.phone),
        gender: Set(dto.gender),
        address: Set(dto.address),
        created_at: Set(now),
        updated_at: Set(now),
    };

    profiles::Entity::insert(active)
        .on_conflict(
            OnConflict::column(profiles::Column::UserId)
                .update_columns([
                    profiles::Column::Phone,
                    profiles::Column::Gender,
                    profiles::Column::Address,
                    profiles::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find_by_user_id(conn, user_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("profiles.user_id={user_id}")))
}
