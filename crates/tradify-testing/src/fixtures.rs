//! Sample catalogs for tests.

use anyhow::Result;
use std::path::Path;
use tradify_runtime::CatalogStore;
use tradify_types::StorefrontContent;

/// The two-product catalog from the search scenarios:
/// one product matches "blue" by name, the other by benefit.
pub const BLUE_CATALOG: &str = r#"{
  "products": [
    {
      "id": 1,
      "name": "Blue Widget",
      "benefits": ["durable"],
      "image": "https://img.example/widget.jpg",
      "affiliateLink": "https://shop.example/widget",
      "rating": 5
    },
    {
      "id": 2,
      "name": "Red Gadget",
      "benefits": ["blue finish"],
      "image": "https://img.example/gadget.jpg",
      "affiliateLink": "https://shop.example/gadget",
      "rating": 4.5
    }
  ],
  "testimonials": [
    {"author": "Sam", "quote": "Quick and honest."}
  ],
  "trustBadges": [
    {"title": "Secure Checkout", "description": "Pay on the retailer's site."}
  ]
}"#;

pub fn blue_catalog() -> Result<CatalogStore> {
    let content: StorefrontContent = serde_json::from_str(BLUE_CATALOG)?;
    Ok(CatalogStore::from_content(content)?)
}

/// Write `BLUE_CATALOG` to `path`
pub fn write_blue_catalog(path: &Path) -> Result<()> {
    std::fs::write(path, BLUE_CATALOG)?;
    Ok(())
}
