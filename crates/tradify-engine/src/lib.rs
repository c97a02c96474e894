// Engine module - pure catalog logic (filtering, highlighting, mail composition)
// This layer sits between the data model (types) and the stateful controllers (runtime)

pub mod filter;
pub mod highlight;
pub mod mail;

pub use filter::{Query, QueryScope, RatingFilter, RatingMatch, filter_products, matches_query};
pub use highlight::highlight;
pub use mail::{MailMessage, compose_contact_message, mailto_uri};

use tradify_types::Product;

// Façade API - stable entry points for the runtime and CLI layers

/// Products for the search overlay: an empty query yields nothing
pub fn search_overlay<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    filter_products(products, query, QueryScope::Overlay, None)
}

/// Products for the main grid: an empty query yields everything
pub fn grid_listing<'a>(
    products: &'a [Product],
    query: &str,
    rating: Option<RatingFilter>,
) -> Vec<&'a Product> {
    filter_products(products, query, QueryScope::Grid, rating)
}
