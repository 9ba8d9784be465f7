//! Browse filters, evaluated as predicates over the in-memory catalog.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A browse filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Match any of the given category tags (OR).
    Categories(Vec<String>),
    /// Match prices inside the inclusive range.
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only products with stock remaining.
    InStock,
    /// Minimum rating.
    MinRating(f32),
    /// Case-insensitive substring over name, description, and category.
    Text(String),
}

impl Filter {
    /// Create a categories filter.
    pub fn categories(categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Filter::Categories(categories.into_iter().map(Into::into).collect())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create an in-stock filter.
    pub fn in_stock() -> Self {
        Filter::InStock
    }

    /// Create a text filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Categories(categories) => {
                categories.is_empty() || categories.iter().any(|c| c == &product.category)
            }
            Filter::PriceRange { min, max } => {
                let cents = product.price.amount_cents;
                min.map_or(true, |m| cents >= m.amount_cents)
                    && max.map_or(true, |m| cents <= m.amount_cents)
            }
            Filter::InStock => product.in_stock(),
            Filter::MinRating(min) => product.rating >= *min,
            Filter::Text(query) => {
                let term = query.trim().to_lowercase();
                if term.is_empty() {
                    return true;
                }
                product.name.to_lowercase().contains(&term)
                    || product.description.to_lowercase().contains(&term)
                    || product.category.to_lowercase().contains(&term)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: &str, cents: i64, category: &str, rating: f32, stock: u32) -> Product {
        Product::new(id, format!("Product {id}"), Money::new(cents, Currency::USD), category, stock)
            .with_rating(rating)
    }

    #[test]
    fn test_categories_or_semantics() {
        let filter = Filter::categories(["fashion", "sports"]);
        assert!(filter.matches(&product("1", 100, "sports", 4.0, 1)));
        assert!(!filter.matches(&product("2", 100, "electronics", 4.0, 1)));
    }

    #[test]
    fn test_empty_categories_matches_all() {
        let filter = Filter::Categories(Vec::new());
        assert!(filter.matches(&product("1", 100, "anything", 4.0, 1)));
    }

    #[test]
    fn test_price_range_inclusive() {
        let filter = Filter::price_range(
            Some(Money::new(1000, Currency::USD)),
            Some(Money::new(5000, Currency::USD)),
        );
        assert!(filter.matches(&product("1", 1000, "a", 4.0, 1)));
        assert!(filter.matches(&product("2", 5000, "a", 4.0, 1)));
        assert!(!filter.matches(&product("3", 999, "a", 4.0, 1)));
        assert!(!filter.matches(&product("4", 5001, "a", 4.0, 1)));
    }

    #[test]
    fn test_in_stock() {
        assert!(Filter::in_stock().matches(&product("1", 100, "a", 4.0, 1)));
        assert!(!Filter::in_stock().matches(&product("2", 100, "a", 4.0, 0)));
    }

    #[test]
    fn test_min_rating() {
        let filter = Filter::MinRating(4.5);
        assert!(filter.matches(&product("1", 100, "a", 4.5, 1)));
        assert!(!filter.matches(&product("2", 100, "a", 4.4, 1)));
    }

    #[test]
    fn test_text_matches_description() {
        let p = product("1", 100, "a", 4.0, 1).with_description("Noise cancelling");
        assert!(Filter::text("CANCEL").matches(&p));
        assert!(!Filter::text("quiet").matches(&p));
    }
}
