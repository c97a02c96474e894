pub mod domain;
pub mod state;

pub use domain::*;
pub use state::*;
