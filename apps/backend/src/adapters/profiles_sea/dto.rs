//! DTOs for profiles_sea adapter.

/// Full replacement of a user's profile fields.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpsert {
    pub user_id: i64,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
}

impl ProfileUpsert {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}
