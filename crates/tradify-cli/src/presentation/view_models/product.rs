use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::TextStyle;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProductEntryViewModel {
    pub id: u32,
    pub name: String,
    pub rating: f64,
    pub stars: usize,
    pub benefits: Vec<String>,
    pub image: String,
    pub affiliate_link: String,
}

#[derive(Debug, Serialize)]
pub struct ProductListViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_filter: Option<f64>,
    pub total_count: usize,
    pub products: Vec<ProductEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailViewModel {
    pub product: ProductEntryViewModel,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ProductListViewModel {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::ProductListView;
        Box::new(ProductListView::new(self, style))
    }
}

impl CreateView for ProductDetailViewModel {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::ProductDetailView;
        Box::new(ProductDetailView::new(self, style))
    }
}
