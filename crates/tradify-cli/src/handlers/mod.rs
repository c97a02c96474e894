pub mod browse;
pub mod config;
pub mod contact;
pub mod guidance;
pub mod products;
pub mod search;
pub mod show;
