use crate::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use tradify_types::{Benefit, Hero, Product, ProductId, StorefrontContent, Testimonial, TrustBadge};

const BUILTIN_STOREFRONT: &str = include_str!("../data/storefront.json");

/// Immutable storefront content, loaded once per process.
///
/// There is no way to mutate a store after construction; controllers borrow
/// `&'c [Product]` from it for their whole lifetime.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    content: StorefrontContent,
}

impl CatalogStore {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        let content = serde_json::from_str(BUILTIN_STOREFRONT)
            .map_err(|source| Error::CatalogFormat { path: None, source })?;
        Self::from_content(content)
    }

    /// A storefront JSON file, either a full document or a bare product array
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let content = parse_storefront(&raw).map_err(|source| Error::CatalogFormat {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(path = %path.display(), products = content.products.len(), "loaded catalog file");
        Self::from_content(content)
    }

    /// Load `path` when given, the built-in catalog otherwise
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::builtin(),
        }
    }

    pub fn from_content(content: StorefrontContent) -> Result<Self> {
        validate(&content.products)?;
        Ok(Self { content })
    }

    pub fn all(&self) -> &[Product] {
        &self.content.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.content.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.content.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.products.is_empty()
    }

    pub fn hero(&self) -> &Hero {
        &self.content.hero
    }

    pub fn benefits(&self) -> &[Benefit] {
        &self.content.benefits
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.content.testimonials
    }

    pub fn trust_badges(&self) -> &[TrustBadge] {
        &self.content.trust_badges
    }
}

fn parse_storefront(raw: &str) -> serde_json::Result<StorefrontContent> {
    if raw.trim_start().starts_with('[') {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        return Ok(StorefrontContent {
            hero: Hero::default(),
            products,
            benefits: Vec::new(),
            testimonials: Vec::new(),
            trust_badges: Vec::new(),
        });
    }
    serde_json::from_str(raw)
}

fn validate(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::new();
    for p in products {
        if !seen.insert(p.id) {
            return Err(Error::DuplicateProduct(p.id));
        }
        if p.name.trim().is_empty() {
            return Err(Error::UnnamedProduct(p.id));
        }
    }
    Ok(())
}
