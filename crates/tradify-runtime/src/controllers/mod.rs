//! Storefront controllers.
//!
//! ## Files
//! - `search_overlay.rs`: Closed/Active search panel and its results.
//! - `product_grid.rs`: main listing with shared query and rating filter.
//! - `contact_form.rs`: three-field form and the mailto handoff.
//! - `navigation.rs`: header menu and section links.
//!
//! Each controller owns its state; cross-controller effects go through
//! `QueryListener` or are sequenced by `Storefront`.

pub mod contact_form;
pub mod navigation;
pub mod product_grid;
pub mod search_overlay;

pub use contact_form::{ACKNOWLEDGMENT, ACKNOWLEDGMENT_DETAIL, ContactForm, ContactSubmission};
pub use navigation::NavigationMenu;
pub use product_grid::{GridSettings, ProductGrid};
pub use search_overlay::{PanelMessage, SearchOverlay};
