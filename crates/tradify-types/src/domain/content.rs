use serde::{Deserialize, Serialize};

use super::product::Product;

/// Banner copy shown at the top of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub tagline: String,
    pub call_to_action: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            headline: "Shop Smart, Save Big!".to_string(),
            tagline: "Explore our curated selection of top-rated products and exclusive deals. \
                      Your smart shopping journey starts here."
                .to_string(),
            call_to_action: "Discover Top Picks".to_string(),
        }
    }
}

/// A "Why Us?" card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    pub quote: String,
    #[serde(default = "default_testimonial_rating")]
    pub rating: f64,
}

fn default_testimonial_rating() -> f64 {
    5.0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustBadge {
    pub title: String,
    pub description: String,
}

/// Everything the storefront page renders, as stored in a catalog file.
///
/// Only `products` is required; the page sections fall back to empty lists
/// and the default hero copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontContent {
    #[serde(default)]
    pub hero: Hero,
    pub products: Vec<Product>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub trust_badges: Vec<TrustBadge>,
}
