//! Bearer token helpers for tests.

use std::time::{Duration, SystemTime};

use backend::auth::jwt::mint_access_token;
use backend::state::security_config::SecurityConfig;

/// Full `Authorization` header value for this user.
pub fn bearer_header(user_id: i64, email: &str, sec: &SecurityConfig) -> String {
    let token = mint_access_token(user_id, email, SystemTime::now(), sec)
        .expect("should mint token successfully");
    format!("Bearer {token}")
}

/// Header value carrying a token that expired an hour ago.
pub fn expired_bearer_header(user_id: i64, email: &str, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now() - sec.token_ttl - Duration::from_secs(3600);
    let token = mint_access_token(user_id, email, issued, sec)
        .expect("should mint expired token successfully");
    format!("Bearer {token}")
}
