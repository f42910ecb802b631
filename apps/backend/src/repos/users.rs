//! User repository: trait plus SeaORM implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::adapters::users_sea as users_adapter;
use crate::adapters::users_sea::UserCreate;
use crate::errors::domain::{DomainError, NotFoundKind};

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, ordered by id. An empty table yields an empty vec.
    async fn find_users(&self) -> Result<Vec<User>, DomainError>;

    /// The user with this id, or `NotFound(User)`.
    async fn get_user(&self, id: i64) -> Result<User, DomainError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert a user; a duplicate email is `Conflict(UniqueEmail)`.
    async fn create_user(&self, dto: UserCreate) -> Result<User, DomainError>;
}

pub struct SeaUserRepository {
    db: DatabaseConnection,
}

impl SeaUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaUserRepository {
    async fn find_users(&self) -> Result<Vec<User>, DomainError> {
        let users = users_adapter::find_all(&self.db).await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        users_adapter::find_by_id(&self.db, id)
            .await?
            .map(User::from)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::User, format!("User {id} not found")))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let user = users_adapter::find_by_email(&self.db, email).await?;
        Ok(user.map(User::from))
    }

    async fn create_user(&self, dto: UserCreate) -> Result<User, DomainError> {
        let user = users_adapter::create_user(&self.db, dto).await?;
        Ok(User::from(user))
    }
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
