pub mod common;
pub mod config;
pub mod contact;
pub mod guidance;
pub mod product;
pub mod result;
pub mod search;

use std::fmt;

use crate::presentation::formatters::TextStyle;

pub use common::{Badge, StatusLevel, Tip};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use contact::ContactResultViewModel;
pub use guidance::GuidanceViewModel;
pub use product::{ProductDetailViewModel, ProductEntryViewModel, ProductListViewModel};
pub use result::CommandOutput;
pub use search::{SearchHitViewModel, SearchNoticeViewModel, SearchResultViewModel};

/// Bridge from a view model to its plain-text view
pub trait CreateView {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a>;
}
