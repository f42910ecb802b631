pub mod jwt;
pub mod password;

pub use jwt::{mint_access_token, verify_access_token, Claims};
pub use password::{hash_password, verify_password};
