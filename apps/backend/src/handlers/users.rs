use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::auth::UserView;
use super::{non_blank, rfc3339};
use crate::adapters::profiles_sea::ProfileUpsert;
use crate::error::AppError;
use crate::repos::{Profile, ProfileRepository, UserRepository};

#[derive(Debug, Default, Deserialize)]
pub struct ProfileRequest {
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub user_id: i64,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub updated_at: String,
}

impl From<Profile> for ProfileView {
    fn from(p: Profile) -> Self {
        Self {
            user_id: p.user_id,
            phone: p.phone,
            gender: p.gender,
            address: p.address,
            updated_at: rfc3339(p.updated_at),
        }
    }
}

pub struct UserHandler {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl UserHandler {
    pub fn new(users: Arc<dyn UserRepository>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { users, profiles }
    }

    pub async fn find_users(&self) -> Result<Vec<UserView>, AppError> {
        let users = self.users.find_users().await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }

    pub async fn get_user(&self, id: i64) -> Result<UserView, AppError> {
        Ok(self.users.get_user(id).await?.into())
    }

    pub async fn get_profile(&self, user_id: i64) -> Result<ProfileView, AppError> {
        Ok(self.profiles.get_profile_by_user(user_id).await?.into())
    }

    /// Replace the caller's profile; blank fields are stored as NULL.
    pub async fn upsert_profile(
        &self,
        user_id: i64,
        req: ProfileRequest,
    ) -> Result<ProfileView, AppError> {
        let dto = ProfileUpsert {
            user_id,
            phone: non_blank(req.phone),
            gender: non_blank(req.gender),
            address: non_blank(req.address),
        };
        Ok(self.profiles.upsert_profile(dto).await?.into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::errors::ErrorCode;
    use crate::handlers::fakes::{FakeProfiles, FakeUsers};

    fn handler() -> UserHandler {
        UserHandler::new(Arc::new(FakeUsers::default()), Arc::new(FakeProfiles::default()))
    }

    #[tokio::test]
    async fn empty_store_lists_no_users() {
        assert!(handler().find_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_user_and_profile_are_not_found() {
        let handler = handler();
        assert_eq!(
            handler.get_user(5).await.unwrap_err().code(),
            ErrorCode::UserNotFound
        );
        assert_eq!(
            handler.get_profile(5).await.unwrap_err().code(),
            ErrorCode::ProfileNotFound
        );
    }

    #[tokio::test]
    async fn upsert_blanks_become_none() {
        let handler = handler();
        let view = handler
            .upsert_profile(
                3,
                ProfileRequest {
                    phone: Some(" 555-0101 ".into()),
                    gender: Some("   ".into()),
                    address: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(view.user_id, 3);
        assert_eq!(view.phone.as_deref(), Some("555-0101"));
        assert_eq!(view.gender, None);
        assert_eq!(handler.get_profile(3).await.unwrap().phone.as_deref(), Some("555-0101"));
    }
}
