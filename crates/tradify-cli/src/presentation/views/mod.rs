mod config;
mod contact;
mod guidance;
mod product;
mod search;

pub use config::{ConfigInitView, ConfigView};
pub use contact::ContactResultView;
pub use guidance::GuidanceView;
pub use product::{ProductDetailView, ProductListView};
pub use search::SearchResultView;
