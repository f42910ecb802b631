//! Repository capabilities, one trait per entity family.
//!
//! Each trait hides the storage query syntax from handlers. Implementations
//! must issue the query, populate the result and propagate any query error;
//! a missing row is reported as `DomainError::NotFound`, never as an empty
//! default value.

pub mod products;
pub mod profiles;
pub mod users;

pub use products::{Product, ProductRepository, SeaProductRepository};
pub use profiles::{Profile, ProfileRepository, SeaProfileRepository};
pub use users::{SeaUserRepository, User, UserRepository};
