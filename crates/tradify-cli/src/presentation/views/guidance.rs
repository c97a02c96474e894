use std::fmt;

use crate::presentation::formatters::TextStyle;
use crate::presentation::view_models::GuidanceViewModel;

pub struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    style: TextStyle,
}

impl<'a> GuidanceView<'a> {
    pub fn new(data: &'a GuidanceViewModel, style: TextStyle) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.style.heading("tradify - terminal storefront"))?;
        writeln!(f)?;
        writeln!(f, "{}", self.data.headline)?;
        writeln!(f, "{}", self.style.dim(&self.data.tagline))?;
        writeln!(f)?;
        writeln!(f, "Catalog:  {} product(s)", self.data.product_count)?;
        writeln!(f, "Data dir: {}", self.data.data_dir)
    }
}
