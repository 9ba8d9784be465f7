//! Bundled demo catalog.

use crate::catalog::{Catalog, Product};
use crate::money::{Currency, Money};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

impl Catalog {
    /// The QuikShop demo dataset: twelve products across four categories.
    pub fn demo() -> Self {
        let usd = |cents| Money::new(cents, Currency::USD);
        Self::new(vec![
            Product::new("1", "Premium Smartphone", usd(99999), "electronics", 15)
                .with_description(
                    "High-end smartphone with the latest features and technology.",
                )
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.8)
                .featured(),
            Product::new("2", "Ultra HD Smart TV", usd(129999), "electronics", 8)
                .with_description(
                    "65-inch Ultra HD Smart TV with HDR and built-in streaming apps.",
                )
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.7)
                .featured(),
            Product::new(
                "3",
                "Wireless Noise-Cancelling Headphones",
                usd(24999),
                "electronics",
                20,
            )
            .with_description("Premium wireless headphones with active noise cancellation.")
            .with_image(PLACEHOLDER_IMAGE)
            .with_rating(4.9),
            Product::new("4", "Men's Casual Jacket", usd(8999), "fashion", 25)
                .with_description("Stylish and comfortable casual jacket for everyday wear.")
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.5)
                .featured(),
            Product::new("5", "Women's Running Shoes", usd(12999), "fashion", 18)
                .with_description(
                    "Lightweight and comfortable running shoes with great support.",
                )
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.6),
            Product::new("6", "Stainless Steel Watch", usd(19999), "fashion", 12)
                .with_description("Elegant stainless steel watch with automatic movement.")
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.7),
            Product::new("7", "Organic Coffee Beans", usd(2499), "groceries", 30)
                .with_description("Premium organic coffee beans, freshly roasted.")
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.8),
            Product::new("8", "Organic Honey", usd(1999), "groceries", 22)
                .with_description("Pure organic honey sourced from sustainable farms.")
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.9),
            Product::new("9", "Yoga Mat", usd(3999), "sports", 15)
                .with_description("Non-slip yoga mat made from eco-friendly materials.")
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.6),
            Product::new("10", "Adjustable Dumbbells", usd(29999), "sports", 10)
                .with_description("Space-saving adjustable dumbbells for home workouts.")
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.7)
                .featured(),
            Product::new("11", "Basketball", usd(4999), "sports", 20)
                .with_description("Professional indoor/outdoor basketball.")
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.5),
            Product::new("12", "Gaming Console", usd(49999), "electronics", 7)
                .with_description("Next-generation gaming console with 1TB storage.")
                .with_image(PLACEHOLDER_IMAGE)
                .with_rating(4.9)
                .featured(),
        ])
    }
}
