mod config;
mod contact;
mod guidance;
mod product;
mod search;

pub use config::{present_config, present_config_init};
pub use contact::present_contact_result;
pub use guidance::present_guidance;
pub use product::{present_product_detail, present_product_entry, present_product_list};
pub use search::present_search;
