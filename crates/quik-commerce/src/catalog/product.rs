//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are externally supplied, loaded once at startup, and never
/// mutated afterwards; the cart snapshots them at add time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Full description for listings and detail pages.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image reference (URL or asset path).
    pub image: String,
    /// Category tag (e.g., "electronics").
    pub category: String,
    /// Average rating, 0–5.
    pub rating: f32,
    /// Units available for purchase.
    pub stock: u32,
    /// Whether the product is featured on the home page.
    pub featured: bool,
}

impl Product {
    /// Create a product with the required fields; the rest default.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.into(),
            rating: 0.0,
            stock,
            featured: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Check if any units are available.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if stock is low enough to surface a "only N left" hint.
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= 5
    }
}
