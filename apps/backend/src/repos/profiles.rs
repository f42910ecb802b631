use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::adapters::profiles_sea as profiles_adapter;
use crate::adapters::profiles_sea::ProfileUpsert;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub updated_at: time::OffsetDateTime,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The profile owned by `user_id`, or `NotFound(Profile)`.
    async fn get_profile_by_user(&self, user_id: i64) -> Result<Profile, DomainError>;

    async fn upsert_profile(&self, dto: ProfileUpsert) -> Result<Profile, DomainError>;
}

pub struct SeaProfileRepository {
    db: DatabaseConnection,
}

impl SeaProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for SeaProfileRepository {
    async fn get_profile_by_user(&self, user_id: i64) -> Result<Profile, DomainError> {
        profiles_adapter::find_by_user_id(&self.db, user_id)
            .await?
            .map(Profile::from)
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Profile,
                    format!("Profile for user {user_id} not found"),
                )
            })
    }

    async fn upsert_profile(&self, dto: ProfileUpsert) -> Result<Profile, DomainError> {
        let profile = profiles_adapter::upsert(&self.db, dto).await?;
        Ok(Profile::from(profile))
    }
}

impl From<crate::entities::profiles::Model> for Profile {
    fn from(model: crate::entities::profiles::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            phone: model.phone,
            gender: model.gender,
            address: model.address,
            updated_at: model.updated_at,
        }
    }
}
