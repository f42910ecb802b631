pub mod products;
pub mod profiles;
pub mod users;
