use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::TextStyle;

#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub config_exists: bool,
    pub product_count: usize,
    pub headline: String,
    pub tagline: String,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::GuidanceView;
        Box::new(GuidanceView::new(self, style))
    }
}
