//! Catalog store: read-only queries over the static product set.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use std::collections::HashMap;
use tracing::warn;

/// Sentinel category that selects the whole catalog.
pub const ALL_CATEGORY: &str = "all";

/// The static, read-only product set plus pure query operations.
///
/// All queries are side-effect-free; results borrow from the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from an externally supplied product list.
    ///
    /// Product ids must be unique; a duplicate keeps the first occurrence
    /// and drops the rest with a warning.
    pub fn new(products: Vec<Product>) -> Self {
        let mut kept = Vec::with_capacity(products.len());
        let mut index = HashMap::with_capacity(products.len());

        for product in products {
            if index.contains_key(&product.id) {
                warn!(id = %product.id, "dropping product with duplicate id");
                continue;
            }
            index.insert(product.id.clone(), kept.len());
            kept.push(product);
        }

        Self {
            products: kept,
            index,
        }
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in supplied order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// Look up a product by id, failing with [`CommerceError::ProductNotFound`].
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.as_str().to_string()))
    }

    /// All products whose category equals `category`.
    ///
    /// The sentinel [`ALL_CATEGORY`] returns the entire set unfiltered.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        if category == ALL_CATEGORY {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, description, and
    /// category.
    ///
    /// An empty (or all-whitespace) query returns the empty set rather
    /// than the full catalog.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || p.category.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Distinct categories in first-seen order, prefixed with the
    /// [`ALL_CATEGORY`] sentinel.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec![ALL_CATEGORY.to_string()];
        for product in &self.products {
            if !out.contains(&product.category) {
                out.push(product.category.clone());
            }
        }
        out
    }

    /// All products carrying the featured flag, in catalog order.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }
}
