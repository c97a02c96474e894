use serde::{Deserialize, Serialize};
use tradify_types::Product;

/// Where a query is evaluated. The two surfaces disagree on what an empty
/// query means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryScope {
    /// Search panel: empty query means "nothing typed yet", no results
    Overlay,
    /// Product grid: empty query means unfiltered
    Grid,
}

/// How a rating threshold is compared against a product rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingMatch {
    #[default]
    Exact,
    AtLeast,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingFilter {
    pub threshold: f64,
    pub mode: RatingMatch,
}

impl RatingFilter {
    pub fn exact(threshold: f64) -> Self {
        Self {
            threshold,
            mode: RatingMatch::Exact,
        }
    }

    pub fn at_least(threshold: f64) -> Self {
        Self {
            threshold,
            mode: RatingMatch::AtLeast,
        }
    }

    pub fn accepts(&self, rating: f64) -> bool {
        match self.mode {
            RatingMatch::Exact => rating == self.threshold,
            RatingMatch::AtLeast => rating >= self.threshold,
        }
    }
}

/// A normalized (trimmed, lowercased) non-empty search needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Returns `None` for empty or whitespace-only input.
    ///
    /// Only leading and trailing whitespace is stripped; inner spaces are
    /// part of the needle.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Literal, case-insensitive substring match against name and benefits
pub fn matches_query(product: &Product, query: &Query) -> bool {
    let needle = query.as_str();
    product.name.to_lowercase().contains(needle)
        || product
            .benefits
            .iter()
            .any(|benefit| benefit.to_lowercase().contains(needle))
}

/// Stable filter over `products`. Never reorders, never copies products.
pub fn filter_products<'a>(
    products: &'a [Product],
    raw_query: &str,
    scope: QueryScope,
    rating: Option<RatingFilter>,
) -> Vec<&'a Product> {
    let query = Query::parse(raw_query);

    if query.is_none() && scope == QueryScope::Overlay {
        return Vec::new();
    }

    products
        .iter()
        .filter(|p| query.as_ref().is_none_or(|q| matches_query(p, q)))
        .filter(|p| rating.is_none_or(|r| r.accepts(p.rating)))
        .collect()
}
