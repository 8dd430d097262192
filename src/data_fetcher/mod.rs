pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::NhlClient;
