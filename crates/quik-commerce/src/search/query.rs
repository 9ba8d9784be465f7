//! Browse query builder.

use crate::catalog::{Catalog, Product};
use crate::search::Filter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for browse results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Catalog order (the merchandised default).
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    Rating,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
        }
    }
}

/// A browse query over the catalog.
///
/// With no text and no filters the query returns the whole catalog —
/// browse mode, as opposed to the point search API where an empty query
/// means nothing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductQuery {
    /// Keyword search term.
    pub text: Option<String>,
    /// Filters, all of which must pass (AND).
    pub filters: Vec<Filter>,
    /// Result ordering.
    pub sort: SortOption,
}

impl ProductQuery {
    /// Create an unconstrained query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword search term.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.text = Some(text);
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query against a catalog.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let mut results: Vec<&Product> = match &self.text {
            Some(text) => catalog.search(text),
            None => catalog.products().iter().collect(),
        };

        results.retain(|p| self.filters.iter().all(|f| f.matches(p)));

        match self.sort {
            SortOption::Featured => {} // keep catalog order
            SortOption::PriceAsc => {
                results.sort_by_key(|p| p.price.amount_cents);
            }
            SortOption::PriceDesc => {
                results.sort_by_key(|p| std::cmp::Reverse(p.price.amount_cents));
            }
            SortOption::Rating => {
                results.sort_by(|a, b| {
                    b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
                });
            }
        }

        results
    }
}
