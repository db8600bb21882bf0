pub mod body_metrics;
pub mod catalog;
pub mod catalog_loader;
pub mod credentials;
