//! SeaORM adapters: raw queries returning `DbErr`.

pub mod products_sea;
pub mod profiles_sea;
pub mod users_sea;
