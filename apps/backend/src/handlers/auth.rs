use std::sync::Arc;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::rfc3339;
use crate::adapters::users_sea::UserCreate;
use crate::auth::jwt::mint_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::{User, UserRepository};
use crate::state::security_config::SecurityConfig;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Serialize, PartialEq)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: rfc3339(user.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub user: UserView,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct CheckAuthPayload {
    pub user: UserView,
}

pub struct AuthHandler {
    users: Arc<dyn UserRepository>,
    security: SecurityConfig,
}

impl AuthHandler {
    pub fn new(users: Arc<dyn UserRepository>, security: SecurityConfig) -> Self {
        Self { users, security }
    }

    /// Create an account and sign it in.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthPayload, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid(ErrorCode::InvalidName, "Name cannot be empty"));
        }
        let email = normalize_email(&req.email)?;
        if req.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::invalid(
                ErrorCode::InvalidPassword,
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        }

        let password_hash = hash_password(&req.password)?;
        let user = self
            .users
            .create_user(UserCreate::new(name, email, password_hash))
            .await?;

        info!(user_id = user.id, "user registered");
        self.sign_in(user)
    }

    /// Exchange email and password for a token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthPayload, AppError> {
        let email = req.email.trim().to_lowercase();

        let user = self
            .users
            .find_user_by_email(&email)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        if !verify_password(&req.password, &user.password_hash)? {
            return Err(AppError::invalid_credentials());
        }

        self.sign_in(user)
    }

    /// The user named by an already-verified token.
    pub async fn check_auth(&self, user_id: i64) -> Result<CheckAuthPayload, AppError> {
        match self.users.get_user(user_id).await {
            Ok(user) => Ok(CheckAuthPayload { user: user.into() }),
            // token outlived its account
            Err(e) if e.is_not_found() => Err(AppError::unauthorized()),
            Err(e) => Err(e.into()),
        }
    }

    fn sign_in(&self, user: User) -> Result<AuthPayload, AppError> {
        let token = mint_access_token(user.id, &user.email, SystemTime::now(), &self.security)?;
        Ok(AuthPayload {
            user: user.into(),
            token,
        })
    }
}

fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            format!("Invalid email address: {}", raw.trim()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::jwt::verify_access_token;
    use crate::handlers::fakes::FakeUsers;

    fn handler() -> AuthHandler {
        AuthHandler::new(Arc::new(FakeUsers::default()), SecurityConfig::default())
    }

    fn register_req(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn register_mints_token_for_new_user() {
        let handler = handler();
        let payload = handler
            .register(register_req(" Ada ", "Ada@Example.com", "hunter2hunter2"))
            .await
            .unwrap();

        assert_eq!(payload.user.name, "Ada");
        assert_eq!(payload.user.email, "ada@example.com");

        let claims = verify_access_token(&payload.token, &SecurityConfig::default()).unwrap();
        assert_eq!(claims.user_id().unwrap(), payload.user.id);
    }

    #[tokio::test]
    async fn register_validates_fields() {
        let handler = handler();
        let cases = [
            (register_req("  ", "a@b.c", "longenough"), ErrorCode::InvalidName),
            (register_req("Ann", "not-an-email", "longenough"), ErrorCode::InvalidEmail),
            (register_req("Ann", "@b.c", "longenough"), ErrorCode::InvalidEmail),
            (register_req("Ann", "a@b.c", "short"), ErrorCode::InvalidPassword),
        ];

        for (req, expected) in cases {
            let err = handler.register(req).await.unwrap_err();
            assert_eq!(err.code(), expected);
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let handler = handler();
        handler
            .register(register_req("Ann", "ann@example.com", "longenough"))
            .await
            .unwrap();

        let err = handler
            .register(register_req("Ann 2", "ANN@example.com", "longenough"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UniqueEmail);
    }

    #[tokio::test]
    async fn login_checks_password() {
        let handler = handler();
        handler
            .register(register_req("Ann", "ann@example.com", "correct-password"))
            .await
            .unwrap();

        let ok = handler
            .login(LoginRequest {
                email: "ann@example.com".into(),
                password: "correct-password".into(),
            })
            .await
            .unwrap();
        assert_eq!(ok.user.email, "ann@example.com");

        for (email, password) in [("ann@example.com", "wrong-password"), ("nobody@example.com", "x")] {
            let err = handler
                .login(LoginRequest {
                    email: email.into(),
                    password: password.into(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::InvalidCredentials));
        }
    }

    #[tokio::test]
    async fn check_auth_for_deleted_user_is_unauthorized() {
        let err = handler().check_auth(99).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}
