pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod host;
pub mod storefront;

pub use catalog::CatalogStore;
pub use config::{Config, DEFAULT_RECIPIENT, DEFAULT_TOP_RATING, resolve_data_dir};
pub use controllers::{
    ACKNOWLEDGMENT, ACKNOWLEDGMENT_DETAIL, ContactForm, ContactSubmission, GridSettings,
    NavigationMenu, PanelMessage, ProductGrid, SearchOverlay,
};
pub use error::{Error, Result};
pub use host::{Host, NoopListener, QueryListener};
pub use storefront::Storefront;
