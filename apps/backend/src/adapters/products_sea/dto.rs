//! DTOs for products_sea adapter.

#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub image: Option<String>,
    pub qty: i32,
    pub user_id: i64,
}

impl ProductCreate {
    pub fn new(user_id: i64, name: impl Into<String>, price: i64, qty: i32) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            image: None,
            qty,
            user_id,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
