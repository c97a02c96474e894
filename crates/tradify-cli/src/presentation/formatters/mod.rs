pub mod rating;
pub mod text;

pub use rating::{format_rating, stars};
pub use text::{TextStyle, truncate};
