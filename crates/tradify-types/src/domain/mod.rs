pub mod content;
pub mod product;
pub mod section;
pub mod segment;

pub use content::*;
pub use product::*;
pub use section::*;
pub use segment::*;
