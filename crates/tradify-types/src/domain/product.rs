use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable product identifier as it appears in the catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

/// A sellable catalog entry.
///
/// Products are loaded once and never mutated; every consumer outside the
/// catalog holds `&Product`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub image: String,
    pub affiliate_link: String,
    pub rating: f64,
}

impl Product {
    /// Number of full stars to draw for this product (0..=5)
    pub fn star_count(&self) -> usize {
        self.rating.clamp(0.0, 5.0).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "name": "Wireless Mouse",
            "benefits": ["Silent clicks"],
            "image": "https://img.example/mouse.jpg",
            "affiliateLink": "https://shop.example/mouse",
            "rating": 4.5
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.affiliate_link, "https://shop.example/mouse");
        assert_eq!(product.benefits, vec!["Silent clicks".to_string()]);
    }

    #[test]
    fn test_missing_benefits_default_to_empty() {
        let json = r#"{"id":1,"name":"Lamp","image":"i","affiliateLink":"l","rating":5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.benefits.is_empty());
    }

    #[test]
    fn test_star_count_is_clamped() {
        let mut product: Product = serde_json::from_str(
            r#"{"id":1,"name":"Lamp","image":"i","affiliateLink":"l","rating":4.6}"#,
        )
        .unwrap();
        assert_eq!(product.star_count(), 5);

        product.rating = 9.0;
        assert_eq!(product.star_count(), 5);

        product.rating = -1.0;
        assert_eq!(product.star_count(), 0);
    }

    #[test]
    fn test_product_id_from_str() {
        assert_eq!(" 12 ".parse::<ProductId>().unwrap(), ProductId::new(12));
        assert!("abc".parse::<ProductId>().is_err());
    }
}
